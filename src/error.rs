//! Error type for encoder adapter bring-up.
//!
//! The knob state machine itself has no failure path; only talking to the
//! encoder chip can fail. We avoid `alloc` - variants carry only the bus
//! error.

use core::fmt;

/// Errors raised while configuring or polling the encoder chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The I²C transaction failed.
    I2c(E),

    /// The interrupt line could not be read.
    Pin,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::Pin => write!(f, "encoder interrupt pin unreadable"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", defmt::Debug2Format(e)),
            Error::Pin => defmt::write!(f, "encoder interrupt pin unreadable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Nack;

    fn fails() -> Result<(), Nack> {
        Err(Nack)
    }

    fn propagate() -> Result<(), Error<Nack>> {
        fails()?;
        Ok(())
    }

    #[test]
    fn bus_errors_propagate_with_question_mark() {
        assert_eq!(propagate(), Err(Error::I2c(Nack)));
    }

    #[test]
    fn display_names_the_failure() {
        let text = format!("{}", Error::<Nack>::I2c(Nack));
        assert_eq!(text, "I2C error: Nack");
        assert_eq!(format!("{}", Error::<Nack>::Pin), "encoder interrupt pin unreadable");
    }
}
