use super::Db;
use crate::{EnumEncoding, NullSemantics, Options};

use quarry_core::Driver;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    /// Replaces every option at once.
    pub fn options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    pub fn null_semantics(&mut self, null_semantics: NullSemantics) -> &mut Self {
        self.options.null_semantics = null_semantics;
        self
    }

    pub fn boolean_not_equals(&mut self, enabled: bool) -> &mut Self {
        self.options.boolean_not_equals = enabled;
        self
    }

    pub fn enum_encoding(&mut self, enum_encoding: EnumEncoding) -> &mut Self {
        self.options.enum_encoding = enum_encoding;
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Db {
        Db {
            driver: Arc::new(driver),
            options: self.options.clone(),
        }
    }
}
