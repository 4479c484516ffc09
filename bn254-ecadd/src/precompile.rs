//! EC-add as a host primitive: raw bytes in, 64 bytes out or an abort.

use crate::curve::{Bn254, Curve};
use crate::parse::{decode_points, INPUT_WORDS, OUTPUT_LENGTH, OUTPUT_WORDS};
use crate::{Aborted, EcAddError};

use std::marker::PhantomData;

/// Memory layout of a call, in 32-byte words, as reported to the host when
/// charging it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallRegion {
    pub input_offset: usize,
    pub input_words: usize,
    pub output_offset: usize,
    pub output_words: usize,
}

impl CallRegion {
    pub const EC_ADD: Self = Self {
        input_offset: 0,
        input_words: INPUT_WORDS,
        output_offset: 0,
        output_words: OUTPUT_WORDS,
    };
}

/// Host capability that charges resources against the current call.
pub trait ResourceBurner {
    /// Charges `amount` for the call laid out as `region`. Any status the
    /// host produces is its own business; the call aborts regardless.
    fn burn(&mut self, region: &CallRegion, amount: u64);
}

/// Burner for hosts without resource accounting.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopBurner;

impl ResourceBurner for NoopBurner {
    fn burn(&mut self, _region: &CallRegion, _amount: u64) {}
}

/// The EC-add primitive bound to a host burner.
///
/// Invalid input costs the whole budget, so a rejected call is never
/// cheaper than a real curve computation.
#[derive(Debug)]
pub struct EcAdd<B: ResourceBurner, C: Curve = Bn254> {
    burner: B,
    _curve: PhantomData<C>,
}

impl<B: ResourceBurner, C: Curve> EcAdd<B, C> {
    pub fn new(burner: B) -> Self {
        Self {
            burner,
            _curve: PhantomData,
        }
    }

    pub fn burner(&self) -> &B {
        &self.burner
    }

    pub fn into_burner(self) -> B {
        self.burner
    }

    /// Adds the two points encoded in `input`; `gas_limit` is what the
    /// call has left and what a rejection burns.
    #[tracing::instrument(level = "debug", skip(self, input), fields(input_len = input.len()))]
    pub fn call(&mut self, input: &[u8], gas_limit: u64) -> Result<[u8; OUTPUT_LENGTH], Aborted> {
        let (p1, p2) = decode_points::<C>(input);
        match p1.add(&p2) {
            Ok(sum) => Ok(sum.to_bytes()),
            Err(err) => Err(self.abort(err, gas_limit)),
        }
    }

    fn abort(&mut self, err: EcAddError, gas_limit: u64) -> Aborted {
        tracing::debug!(%err, burned = gas_limit, "rejecting ec add input");
        self.burner.burn(&CallRegion::EC_ADD, gas_limit);
        Aborted { burned: gas_limit }
    }
}

impl Default for EcAdd<NoopBurner> {
    fn default() -> Self {
        Self::new(NoopBurner)
    }
}
