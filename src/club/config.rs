use derive_getters::Getters;

/// Where the governing body's REST backend lives.
#[derive(Debug, Getters, Clone)]
pub struct BackendApiConfig {
    host: String,
}

impl BackendApiConfig {
    pub fn new(host: String) -> Self {
        Self { host }
    }
}
