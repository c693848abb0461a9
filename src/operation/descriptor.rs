//! Operation descriptors
//!
//! An [`OperationDescriptor`] carries everything the dispatcher needs to
//! build, send and project one Chime SDK Voice API call: the REST route, the
//! request shape as a list of [`ParamSpec`]s and the response shape as a list
//! of top-level output members. Descriptors are `'static` and never mutated.

use heck::ToKebabCase;

/// HTTP method of a REST-JSON operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Type of a bound parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    StringList,
    /// String keys to string values (tags, SIP headers, ...)
    Map,
    /// Arbitrary JSON document for structured members
    Json,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
            ParamKind::StringList => "string list",
            ParamKind::Map => "map",
            ParamKind::Json => "json",
        }
    }
}

/// Where a parameter lands in the HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Replaces `{placeholder}` in the path template
    Path(&'static str),
    /// Query string parameter with the given wire name
    Query(&'static str),
    /// JSON body member. Dots nest: `VoiceConnector.CdrBucket`
    Body(&'static str),
}

/// One request parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: Location,
    pub required: bool,
}

impl ParamSpec {
    pub const fn path(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: Location::Path(placeholder),
            required: true,
        }
    }

    pub const fn query(name: &'static str, wire: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            location: Location::Query(wire),
            required: false,
        }
    }

    /// Body member whose wire path equals the parameter name
    pub const fn body(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            location: Location::Body(name),
            required: false,
        }
    }

    /// Body member nested below `member`, e.g. `VoiceConnector.CdrBucket`
    pub const fn nested(name: &'static str, member: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            location: Location::Body(member),
            required: false,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Long flag used on the command line (`PhoneNumberId` -> `phone-number-id`)
    pub fn flag_name(&self) -> String {
        self.name.to_kebab_case()
    }
}

/// Static description of one API operation
#[derive(Debug)]
pub struct OperationDescriptor {
    /// API operation name, e.g. `ListPhoneNumbers`
    pub name: &'static str,
    pub summary: &'static str,
    pub method: HttpMethod,
    /// Path template; may carry a static query suffix (`/tags?operation=tag-resource`)
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    /// Top-level members of the response
    pub outputs: &'static [&'static str],
    /// Field returned when no selector is given; `None` returns the whole response
    pub default_select: Option<&'static str>,
    /// Changes remote state; the CLI asks for confirmation unless forced
    pub mutating: bool,
    /// Advisory shown when a deprecated operation is invoked
    pub deprecated: Option<&'static str>,
}

impl OperationDescriptor {
    /// Subcommand name (`ListPhoneNumbers` -> `list-phone-numbers`)
    pub fn command_name(&self) -> String {
        self.name.to_kebab_case()
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn declares_output(&self, field: &str) -> bool {
        self.outputs.contains(&field)
    }
}
