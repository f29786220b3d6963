use url::form_urlencoded;

/// Name reserved for the API key. Never set by generated code; the
/// [`crate::Connection`] injects it when a call requires one.
const KEY_NAME: &str = "key";

/// Ordered collection of request parameters.
///
/// Pairs encode in insertion order. Each typed `add_*` method renders its
/// value the way the Web API expects it; generated transmission functions
/// pick the method matching the declared schema type of each parameter.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pairs: Vec<(String, String)>,
}

impl Parameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no parameter has been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Adds a string-valued parameter.
    pub fn add_string(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Adds a raw-binary parameter. Bytes are decoded lossily; the service
    /// declares these fields as opaque strings on the wire.
    pub fn add_bytes(&mut self, name: &str, value: &[u8]) {
        self.pairs
            .push((name.to_string(), String::from_utf8_lossy(value).into_owned()));
    }

    /// Adds a signed 32-bit integer parameter.
    pub fn add_i32(&mut self, name: &str, value: i32) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Adds an unsigned 32-bit integer parameter.
    pub fn add_u32(&mut self, name: &str, value: u32) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Adds an unsigned 64-bit integer parameter.
    pub fn add_u64(&mut self, name: &str, value: u64) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Adds a 32-bit float parameter.
    pub fn add_f32(&mut self, name: &str, value: f32) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Adds a boolean parameter, rendered as `true`/`false`.
    pub fn add_bool(&mut self, name: &str, value: bool) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Sets the API key, replacing any previously set key.
    pub fn set_key(&mut self, key: &str) {
        self.pairs.retain(|(name, _)| name != KEY_NAME);
        self.pairs.push((KEY_NAME.to_string(), key.to_string()));
    }

    /// Percent-encodes the collected pairs as a query/form string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}
