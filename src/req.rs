use std::num::NonZeroU16;

use crate::url::{module, ParamSink, ParamValue, Params};

/// Everything sent to the action API: `action`, `format=json`, then the
/// action's own parameters.
#[derive(Clone, Debug)]
pub struct Main {
    pub action: Action,
}

impl Main {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl Params for Main {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.param("action", self.action.name())?;
        sink.param("format", "json")?;
        match &self.action {
            Action::Query(q) => q.write_params(sink),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Action {
    Query(Query),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Query {
    /// A single title, sent as-is. No validation happens client side.
    pub titles: Option<String>,
    pub list: Option<QueryList>,
    /// Which properties to get for the queried pages.
    pub prop: Option<QueryProp>,
}

impl Query {
    /// `titles=<title>&prop=extracts&exintro=`
    pub fn extract(title: impl Into<String>) -> Self {
        Self {
            titles: Some(title.into()),
            prop: Some(QueryProp::Extracts(PropExtracts { intro: true })),
            ..Default::default()
        }
    }

    /// Basic page info only, no properties.
    pub fn page_info(title: impl Into<String>) -> Self {
        Self {
            titles: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn random(namespace: i32, limit: NonZeroU16) -> Self {
        Self {
            list: Some(QueryList::Random(ListRandom { namespace, limit })),
            ..Default::default()
        }
    }

    /// Full text search. Without a limit the server picks one (10).
    pub fn search(text: impl Into<String>, limit: Option<NonZeroU16>) -> Self {
        Self {
            list: Some(QueryList::Search(ListSearch {
                search: text.into(),
                limit,
            })),
            ..Default::default()
        }
    }
}

impl Params for Query {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.titles.write_value("titles", sink)?;
        self.list.write_value("list", sink)?;
        self.prop.write_value("prop", sink)
    }
}

#[derive(Clone, Debug)]
pub enum QueryList {
    Random(ListRandom),
    Search(ListSearch),
}

impl ParamValue for QueryList {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Random(r) => module(sink, name, "random", "rn", r),
            Self::Search(s) => module(sink, name, "search", "sr", s),
        }
    }
}

/// `list=random`, options prefixed with `rn`.
#[derive(Clone, Debug)]
pub struct ListRandom {
    pub namespace: i32,
    pub limit: NonZeroU16,
}

impl Params for ListRandom {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.namespace.write_value("namespace", sink)?;
        self.limit.write_value("limit", sink)
    }
}

/// `list=search`, options prefixed with `sr`.
#[derive(Clone, Debug)]
pub struct ListSearch {
    pub search: String,
    pub limit: Option<NonZeroU16>,
}

impl Params for ListSearch {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.search.write_value("search", sink)?;
        self.limit.write_value("limit", sink)
    }
}

#[derive(Clone, Debug)]
pub enum QueryProp {
    Extracts(PropExtracts),
}

impl ParamValue for QueryProp {
    fn write_value<S: ParamSink>(&self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Extracts(e) => module(sink, name, "extracts", "ex", e),
        }
    }
}

/// `prop=extracts`, options prefixed with `ex`.
#[derive(Clone, Debug, Default)]
pub struct PropExtracts {
    /// Only the content before the first section.
    pub intro: bool,
}

impl Params for PropExtracts {
    fn write_params<S: ParamSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.intro.write_value("intro", sink)
    }
}
