// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Argument objects.
//
// Every command receives a JSON object keyed by parameter name. Optional
// parameters the caller left out are *absent*, never `null`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Builder for a command's argument object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Map<String, Value>);

impl Args {
    /// Empty argument object, sent as `{}`.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a required parameter.
    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self> {
        self.0.insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Add an optional parameter; `None` leaves the key out entirely.
    pub fn maybe<T: Serialize + ?Sized>(self, key: &str, value: Option<&T>) -> Result<Self> {
        match value {
            Some(v) => self.with(key, v),
            None => Ok(self),
        }
    }

    /// Add an optional parameter whose documented default is an empty object.
    pub fn or_empty<T: Serialize + ?Sized>(mut self, key: &str, value: Option<&T>) -> Result<Self> {
        match value {
            Some(v) => self.with(key, v),
            None => {
                self.0.insert(key.to_owned(), Value::Object(Map::new()));
                Ok(self)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Args> for Value {
    fn from(args: Args) -> Self {
        args.into_value()
    }
}
