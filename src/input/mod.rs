//! Parse input configuration file

use std::path::Path;
use std::ops::Add;
use std::f64::consts;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

mod error;
mod types;

pub use error::*;
pub use types::*;

/// Represents the input configuration, which defines the series
/// to be evaluated, as well as any named constants.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

/// Wraps a function of a single variable so that it can be
/// called from a mathematical expression.
fn unary(f: fn(f64) -> f64) -> Function {
    Function::new(move |arg| {
        let x = arg.as_number()?;
        Ok(Value::Float(f(x)))
    })
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be read or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InputError::file(&path.display().to_string(), e))?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly, reporting
    /// where the YAML scanner gave up.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)?;
        let input = input.into_iter()
            .next()
            .ok_or(InputError::Parse { line: 1, col: 0, info: "no YAML document found".to_owned() })?;

        Ok(Config {
            input,
            ctx: HashMapContext::new(),
        })
    }

    /// Loads default values for constants and elementary functions,
    /// then evaluates the expressions given in the specified `section`.
    /// Keys are evaluated in order, so each one may refer to those
    /// that precede it.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        let mut ctx = context_map! {
            "pi" => consts::PI,
            "tau" => consts::TAU,
            "e" => consts::E,
            "degree" => consts::PI / 180.0,
        }.map_err(|_| InputError::conversion(section, "default constants"))?;

        let functions: [(&str, fn(f64) -> f64); 7] = [
            ("sqrt", f64::sqrt),
            ("abs",  f64::abs),
            ("exp",  f64::exp),
            ("ln",   f64::ln),
            ("sin",  f64::sin),
            ("cos",  f64::cos),
            ("tan",  f64::tan),
        ];

        for (name, f) in functions.iter() {
            ctx.set_function(name.to_string(), unary(*f))
                .map_err(|_| InputError::conversion(section, name))?;
        }

        self.ctx = ctx;

        // Read in from constants block if it exists
        if self.input[section].is_badvalue() {
            return Ok(self);
        }

        let entries = self.input[section].as_hash()
            .ok_or_else(|| InputError::conversion(section, section))?;

        for (a, b) in entries {
            let key = match a {
                Yaml::String(k) => k,
                _ => return Err(InputError::conversion(section, "non-string key")),
            };

            let value = match b {
                Yaml::Integer(i) => Some(*i as f64),
                Yaml::Real(s) => s.parse::<f64>().ok(),
                Yaml::String(s) => eval_number_with_context(s, &self.ctx).ok(),
                _ => None,
            };

            // insert it into the context so it's available for the next read
            let value = value.ok_or_else(|| InputError::conversion(section, key))?;
            self.ctx.set_value(key.clone(), Value::from(value))
                .map_err(|_| InputError::conversion(section, key))?;
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let address: Vec<&str> = path.split(':').collect();

        let value = address.iter()
            .try_fold(&self.input, |y, s| {
                if y[*s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[*s])
                }
            })?;

        let last = address.last().copied().unwrap_or(path);
        T::from_yaml(value.clone(), &self.ctx)
            .map_err(|_| InputError::conversion(path, last))
    }

    /// Parses a string argument and evaluates it using the loaded context,
    /// e.g. `"2.0 / (1.0 + theta)"`, where `theta` is specified in the
    /// constants block.
    pub fn evaluate<S: AsRef<str>>(&self, arg: S) -> Option<f64> {
        eval_number_with_context(arg.as_ref(), &self.ctx).ok()
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse it as a looped variable, returning a Vec of the values.
    /// The loop is defined by a `start`, `stop` and `step`, and includes
    /// `stop` if it is reached exactly:
    ///
    /// ```yaml
    /// x:
    ///   start: 1.0
    ///   stop: 1.5
    ///   step: 0.25
    /// ```
    ///
    /// gives `[1.0, 1.25, 1.5]`. A sequence is returned as is, and a
    /// single value gives a Vec of length one.
    pub fn read_loop<T, S>(&self, path: S) -> Result<Vec<T>, InputError>
    where
        T: FromYaml + PartialOrd + Add<Output=T> + Copy,
        S: AsRef<str>
    {
        let key = path.as_ref();
        let start_key = format!("{}:start", key);

        if self.read::<T, _>(&start_key).is_err() {
            return self.read(key);
        }

        let start: T = self.read(&start_key)?;
        let stop: T = self.read(format!("{}:stop", key))?;
        let step: T = self.read(format!("{}:step", key))?;

        // a loop that never advances would never terminate
        if !(start + step > start) {
            return Err(InputError::conversion(key, "step"));
        }

        let mut v: Vec<T> = Vec::new();
        let mut x = start;
        while x <= stop {
            v.push(x);
            let next = x + step;
            // step lost to rounding, e.g. 1.0 above 2^53
            if !(next > x) {
                return Err(InputError::conversion(key, "step"));
            }
            x = next;
        }

        Ok(v)
    }
}
