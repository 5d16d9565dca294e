use asvocab::{Registry, VocabType};

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub output: OutputConfig,

	#[serde(default)]
	pub decoding: DecodingConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent and break lines of printed json
	pub pretty: bool,

	#[serde_inline_default(true)]
	/// replace the @context of decoded documents with one built from what was actually used
	pub emit_context: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DecodingConfig {
	#[serde(default)]
	/// types which should never be recognized, values of these types are kept opaque
	pub disabled_types: Vec<String>,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

impl DecodingConfig {
	pub fn registry(&self) -> Registry {
		let mut registry = Registry::activitystreams();
		for name in &self.disabled_types {
			match VocabType::try_from(name.as_str()) {
				Ok(vocab_type) => {
					registry.unregister(vocab_type);
					tracing::debug!("disabled deserializer for {vocab_type}");
				},
				Err(_) => tracing::warn!("cannot disable unknown type '{name}'"),
			}
		}
		registry
	}
}
