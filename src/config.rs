use std::{fmt::Display, net::IpAddr, str::FromStr};

use serde::{de, Deserialize, Deserializer};
use tracing::Level;

pub const ENV_PREFIX: &str = "BLOG_API_";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to read .env file: {0}")]
	Dotenv(#[from] dotenvy::Error),
	#[error("invalid environment: {0}")]
	Env(#[from] envy::Error),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
	/// Human-readable, colored output.
	#[default]
	Pretty,
	/// One JSON object per line.
	Json,
}

impl FromStr for LogFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			_ => Err("expected `pretty` or `json`".into()),
		}
	}
}

#[derive(Debug, Clone)]
pub struct LogConfig {
	pub level: Level,
	pub format: LogFormat,
}

/// Process configuration, read from `BLOG_API_`-prefixed environment variables.
#[derive(Debug, Clone)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	pub log: LogConfig,
}

/// The raw variables, named after their unprefixed, lowercased keys.
#[derive(Deserialize)]
struct Vars {
	#[serde(default = "default_host", deserialize_with = "http_host")]
	http_host: IpAddr,
	#[serde(default = "default_port", deserialize_with = "http_port")]
	http_port: u16,
	#[serde(default = "default_level", deserialize_with = "log_level")]
	log_level: Level,
	#[serde(default, deserialize_with = "log_format")]
	log_format: LogFormat,
}

fn default_host() -> IpAddr {
	IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
	3000
}

fn default_level() -> Level {
	Level::INFO
}

fn http_host<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IpAddr, D::Error> {
	parse(deserializer, "HTTP_HOST")
}

fn http_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
	parse(deserializer, "HTTP_PORT")
}

fn log_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
	parse(deserializer, "LOG_LEVEL")
}

fn log_format<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LogFormat, D::Error> {
	parse(deserializer, "LOG_FORMAT")
}

/// Parses a variable through its [`FromStr`] impl, naming the full variable on failure.
fn parse<'de, D, T>(deserializer: D, name: &str) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: FromStr,
	T::Err: Display,
{
	let value = String::deserialize(deserializer)?;

	value.trim().parse().map_err(|error| {
		de::Error::custom(format_args!(
			"invalid value {value:?} for {ENV_PREFIX}{name}: {error}"
		))
	})
}

impl Vars {
	fn into_config(self) -> Config {
		Config {
			host: self.http_host,
			port: self.http_port,
			log: LogConfig {
				level: self.log_level,
				format: self.log_format,
			},
		}
	}
}

impl Config {
	/// Loads the optional `.env` file, then reads the configuration from the environment.
	///
	/// A missing `.env` file is fine, a malformed one is an error.
	pub fn from_env() -> Result<Self, Error> {
		if let Err(error) = dotenvy::dotenv() {
			if !error.not_found() {
				return Err(error.into());
			}
		}

		Self::from_vars(std::env::vars())
	}

	/// Reads the configuration from `vars`, given as full variable names.
	pub fn from_vars<I>(vars: I) -> Result<Self, Error>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let vars = envy::prefixed(ENV_PREFIX).from_iter::<_, Vars>(vars)?;

		Ok(vars.into_config())
	}
}
