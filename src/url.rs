//! Request values written out as ordered `name=value` pairs.
//!
//! MediaWiki selects a module with a plain parameter (`list=search`) and then
//! reads that module's options under a short prefix (`srsearch`, `srlimit`).
//! [`ParamValue::write_value`] writes the selector and [`module`] writes the
//! options through a [`Prefixed`] sink, so the request types only name their
//! own fields.

use std::num::NonZeroU16;

use serde::ser::SerializeSeq;

/// Receives parameters in the order they go on the wire.
pub trait ParamSink {
    type Error;
    fn param(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// A request fragment made of zero or more named parameters.
pub trait Params {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error>;
}

/// The value of one parameter, plus anything that has to follow it.
pub trait ParamValue {
    /// Writes `name=<self>`. Absent values write nothing.
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error>;
}

/// Writes `name=value` followed by `options`, each option name prefixed.
pub fn module<S, P>(
    sink: &mut S,
    name: &str,
    value: &str,
    prefix: &'static str,
    options: &P,
) -> Result<(), S::Error>
where
    S: ParamSink,
    P: Params,
{
    sink.param(name, value)?;
    options.write_params(&mut Prefixed::new(sink, prefix))
}

pub struct Prefixed<'a, S> {
    sink: &'a mut S,
    prefix: &'static str,
    buf: String,
}

impl<'a, S: ParamSink> Prefixed<'a, S> {
    pub fn new(sink: &'a mut S, prefix: &'static str) -> Self {
        Self {
            sink,
            prefix,
            buf: String::new(),
        }
    }
}

impl<S: ParamSink> ParamSink for Prefixed<'_, S> {
    type Error = S::Error;
    fn param(&mut self, name: &str, value: &str) -> Result<(), S::Error> {
        self.buf.clear();
        self.buf.push_str(self.prefix);
        self.buf.push_str(name);
        self.sink.param(&self.buf, value)
    }
}

/// Feeds parameters into a serde sequence as `(name, value)` tuples.
pub struct SeqSink<T>(pub T);

impl<T: SerializeSeq> ParamSink for SeqSink<T> {
    type Error = T::Error;
    fn param(&mut self, name: &str, value: &str) -> Result<(), T::Error> {
        self.0.serialize_element(&(name, value))
    }
}

/// Serializes as a sequence of pairs, the shape
/// `reqwest::RequestBuilder::query` accepts.
pub struct AsPairs<T>(pub T);

impl<T: Params> serde::Serialize for AsPairs<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut sink = SeqSink(serializer.serialize_seq(None)?);
        self.0.write_params(&mut sink)?;
        sink.0.end()
    }
}

impl ParamValue for str {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        sink.param(name, self)
    }
}

impl ParamValue for String {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        sink.param(name, self)
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Some(v) => v.write_value(name, sink),
            None => Ok(()),
        }
    }
}

/// MediaWiki booleans are true when present, whatever the value.
impl ParamValue for bool {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        if *self {
            sink.param(name, "")?;
        }
        Ok(())
    }
}

macro_rules! number_values {
    ($($ty:ty),*$(,)?) => {$(
        impl ParamValue for $ty {
            fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
                sink.param(name, &self.to_string())
            }
        }
    )*};
}

number_values! {
    i32,
    NonZeroU16,
}

/// Collects parameters for inspection.
#[cfg(test)]
#[derive(Default, Debug)]
pub(crate) struct Pairs(pub Vec<(String, String)>);

#[cfg(test)]
impl ParamSink for Pairs {
    type Error = std::convert::Infallible;
    fn param(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.0.push((name.to_owned(), value.to_owned()));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn pairs(p: &impl Params) -> Vec<(String, String)> {
    let mut out = Pairs::default();
    if let Err(e) = p.write_params(&mut out) {
        match e {}
    }
    out.0
}
