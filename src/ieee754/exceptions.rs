/*
    Exceptions
*/

use super::*;

impl Exceptions {
    /// Clears all exceptions.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if any exception was raised.
    pub fn any(&self) -> bool {
        self.invalid || self.div_by_zero || self.overflow || self.underflow || self.inexact
    }

    /// Returns the `invalid` field.
    pub fn invalid(&self) -> bool {
        self.invalid
    }

    /// Returns the `div_by_zero` field.
    pub fn div_by_zero(&self) -> bool {
        self.div_by_zero
    }

    /// Returns the `overflow` field.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Returns the `underflow` field.
    pub fn underflow(&self) -> bool {
        self.underflow
    }

    /// Returns the `inexact` field.
    pub fn inexact(&self) -> bool {
        self.inexact
    }

    /// Sets the `invalid` field.
    pub fn with_invalid(mut self, raised: bool) -> Self {
        self.invalid = raised;
        self
    }

    /// Sets the `div_by_zero` field.
    pub fn with_div_by_zero(mut self, raised: bool) -> Self {
        self.div_by_zero = raised;
        self
    }

    /// Sets the `overflow` field.
    pub fn with_overflow(mut self, raised: bool) -> Self {
        self.overflow = raised;
        self
    }

    /// Sets the `underflow` field.
    pub fn with_underflow(mut self, raised: bool) -> Self {
        self.underflow = raised;
        self
    }

    /// Sets the `inexact` field.
    pub fn with_inexact(mut self, raised: bool) -> Self {
        self.inexact = raised;
        self
    }
}
