//! YAML-readable types

use std::convert::TryFrom;
use yaml_rust::yaml::Yaml;
use evalexpr::{HashMapContext, eval_number_with_context, eval_int_with_context};

use crate::series::Series;

/// Types that can be parsed from a YAML-formatted file
pub trait FromYaml: Sized {
    /// Attempt to parse the YAML field as the specified type, using the
    /// supplied context for named constants and functions.
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()>;
}

impl FromYaml for bool {
    fn from_yaml(arg: Yaml, _ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Boolean(b) => Ok(b),
            _ => Err(())
        }
    }
}

impl FromYaml for String {
    fn from_yaml(arg: Yaml, _ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::String(s) | Yaml::Real(s) => Ok(s),
            Yaml::Integer(i) => Ok(i.to_string()),
            Yaml::Boolean(b) => Ok(b.to_string()),
            _ => Err(())
        }
    }
}

impl FromYaml for f64 {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Real(s) => s.parse::<f64>().or(Err(())),
            Yaml::Integer(i) => Ok(i as f64),
            Yaml::String(s) => eval_number_with_context(&s, ctx).or(Err(())),
            _ => Err(())
        }
    }
}

impl FromYaml for i64 {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Integer(i) => Ok(i),
            Yaml::String(s) => eval_int_with_context(&s, ctx).or(Err(())),
            _ => Err(())
        }
    }
}

impl FromYaml for usize {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        let i: i64 = FromYaml::from_yaml(arg, ctx)?;
        usize::try_from(i).map_err(|_| ())
    }
}

impl FromYaml for Series {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        let s: String = FromYaml::from_yaml(arg, ctx)?;
        s.parse::<Series>().map_err(|_| ())
    }
}

/// A sequence, or a single value that is treated as a
/// sequence of length one.
impl<T: FromYaml> FromYaml for Vec<T> {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Array(array) => {
                if array.is_empty() {
                    return Err(());
                }
                array.into_iter()
                    .map(|y| T::from_yaml(y, ctx))
                    .collect()
            },
            Yaml::Hash(_) | Yaml::Null | Yaml::BadValue => Err(()),
            y => T::from_yaml(y, ctx).map(|v| vec![v]),
        }
    }
}
