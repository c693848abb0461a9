//! Request builder
//!
//! Turns an [`InvocationContext`] into a REST-JSON [`PreparedRequest`]:
//! - path placeholders (`{voiceConnectorId}`) are filled and percent-encoded
//! - query parameters are appended after any static query in the template
//! - body members are collected into a JSON object, nesting dotted members
//!
//! Unbound optional parameters are left out entirely so that server-side
//! defaults apply.

use serde_json::{Map, Value};
use tracing::trace;

use super::context::InvocationContext;
use super::descriptor::{HttpMethod, Location};
use crate::error::{Error, Result};

/// A request ready to be sent by a [`ServiceClient`](super::invoker::ServiceClient)
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Expanded path without query string
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the request for the context's operation
pub fn build_request(ctx: &InvocationContext<'_>) -> Result<PreparedRequest> {
    let descriptor = ctx.descriptor();

    for spec in descriptor.params {
        if spec.required && !ctx.is_bound(spec.name) {
            return Err(Error::missing(spec.name));
        }
    }

    let (template, static_query) = match descriptor.path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (descriptor.path, None),
    };

    let mut path = template.to_string();
    let mut query: Vec<(String, String)> = Vec::new();
    let mut body = Map::new();

    if let Some(static_query) = static_query {
        for pair in static_query.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            query.push((k.to_string(), v.to_string()));
        }
    }

    for spec in descriptor.params {
        let Some(value) = ctx.get(spec.name) else {
            continue;
        };

        match spec.location {
            Location::Path(placeholder) => {
                let raw = match value.to_query_values().as_slice() {
                    [single] => single.clone(),
                    _ => {
                        return Err(Error::invalid_value(
                            spec.name,
                            "path parameters take exactly one value",
                        ))
                    }
                };
                if raw.is_empty() {
                    return Err(Error::invalid_value(spec.name, "must not be empty"));
                }
                path = path.replace(
                    &format!("{{{}}}", placeholder),
                    &urlencoding::encode(&raw),
                );
            }
            Location::Query(wire) => {
                for v in value.to_query_values() {
                    query.push((wire.to_string(), v));
                }
            }
            Location::Body(member) => {
                insert_member(&mut body, member, value.to_json());
            }
        }
    }

    let body = if body.is_empty() {
        None
    } else {
        Some(Value::Object(body))
    };

    let request = PreparedRequest {
        operation: descriptor.name,
        method: descriptor.method,
        path,
        query,
        body,
    };
    trace!("Built request: {:?}", request);
    Ok(request)
}

/// Insert `value` at a dotted member path, creating parent objects on demand
fn insert_member(body: &mut Map<String, Value>, member: &str, value: Value) {
    match member.split_once('.') {
        None => {
            body.insert(member.to_string(), value);
        }
        Some((parent, rest)) => {
            let entry = body
                .entry(parent.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_member(child, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::context::ParamValue;
    use crate::operation::descriptor::{OperationDescriptor, ParamKind, ParamSpec};
    use crate::operation::registry::{find_operation, operations};
    use serde_json::json;

    fn op(name: &str) -> &'static OperationDescriptor {
        find_operation(name).expect("registered operation")
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let ctx = InvocationContext::new(op("GetVoiceConnector"));
        let err = build_request(&ctx).unwrap_err();
        assert!(
            matches!(err, Error::MissingRequiredField { ref field } if field == "VoiceConnectorId")
        );
    }

    #[test]
    fn test_every_required_field_is_enforced() {
        for descriptor in operations() {
            for required in descriptor.params.iter().filter(|p| p.required) {
                let mut ctx = InvocationContext::new(descriptor);
                for other in descriptor.params.iter().filter(|p| p.name != required.name) {
                    ctx.bind(other.name, sample_value(other.kind)).unwrap();
                }
                match build_request(&ctx) {
                    Err(Error::MissingRequiredField { field }) => {
                        assert_eq!(field, required.name, "{}", descriptor.name)
                    }
                    other => panic!(
                        "{} without {} should fail, got {:?}",
                        descriptor.name, required.name, other
                    ),
                }
            }
        }
    }

    #[test]
    fn test_unbound_optional_fields_are_omitted() {
        let mut ctx = InvocationContext::new(op("CreateVoiceConnector"));
        ctx.bind("Name", ParamValue::String("edge".into())).unwrap();
        ctx.bind("RequireEncryption", ParamValue::Boolean(false))
            .unwrap();

        let request = build_request(&ctx).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/voice-connectors");
        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(json!({"Name": "edge", "RequireEncryption": false}))
        );
    }

    #[test]
    fn test_get_without_filters_has_no_query_or_body() {
        let ctx = InvocationContext::new(op("ListPhoneNumbers"));
        let request = build_request(&ctx).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/phone-numbers");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_path_placeholder_is_encoded() {
        let mut ctx = InvocationContext::new(op("GetPhoneNumber"));
        ctx.bind("PhoneNumberId", ParamValue::String("+1 555".into()))
            .unwrap();
        let request = build_request(&ctx).unwrap();
        assert_eq!(request.path, "/phone-numbers/%2B1%20555");
    }

    #[test]
    fn test_static_query_comes_first() {
        let mut ctx = InvocationContext::new(op("TagResource"));
        ctx.bind("ResourceARN", ParamValue::String("arn:1".into()))
            .unwrap();
        ctx.bind(
            "Tags",
            ParamValue::Json(json!([{"Key": "env", "Value": "prod"}])),
        )
        .unwrap();

        let request = build_request(&ctx).unwrap();
        assert_eq!(request.path, "/tags");
        assert_eq!(
            request.query,
            vec![("operation".to_string(), "tag-resource".to_string())]
        );
        assert_eq!(
            request.body,
            Some(json!({"ResourceARN": "arn:1", "Tags": [{"Key": "env", "Value": "prod"}]}))
        );
    }

    #[test]
    fn test_query_parameters_use_wire_names() {
        let mut ctx = InvocationContext::new(op("ListPhoneNumbers"));
        ctx.bind("Status", ParamValue::String("Assigned".into()))
            .unwrap();
        ctx.bind("MaxResults", ParamValue::Integer(5)).unwrap();
        ctx.bind("NextToken", ParamValue::String("tok".into()))
            .unwrap();

        let request = build_request(&ctx).unwrap();
        assert_eq!(request.query_value("status"), Some("Assigned"));
        assert_eq!(request.query_value("max-results"), Some("5"));
        assert_eq!(request.query_value("next-token"), Some("tok"));
    }

    #[test]
    fn test_nested_members_create_parent_only_when_bound() {
        let ctx = InvocationContext::new(op("UpdateGlobalSettings"));
        let request = build_request(&ctx).unwrap();
        assert!(request.body.is_none());

        let mut ctx = InvocationContext::new(op("UpdateGlobalSettings"));
        ctx.bind("VoiceConnectorCdrBucket", ParamValue::String("cdr".into()))
            .unwrap();
        let request = build_request(&ctx).unwrap();
        assert_eq!(
            request.body,
            Some(json!({"VoiceConnector": {"CdrBucket": "cdr"}}))
        );
    }

    #[test]
    fn test_lists_are_copied_not_aliased() {
        let mut ctx = InvocationContext::new(op("BatchDeletePhoneNumber"));
        ctx.bind(
            "PhoneNumberIds",
            ParamValue::StringList(vec!["a".into(), "b".into()]),
        )
        .unwrap();
        let request = build_request(&ctx).unwrap();

        ctx.bind("PhoneNumberIds", ParamValue::StringList(vec!["c".into()]))
            .unwrap();
        assert_eq!(request.body, Some(json!({"PhoneNumberIds": ["a", "b"]})));
    }

    #[test]
    fn test_empty_path_parameter_is_rejected() {
        static GET_THING: OperationDescriptor = OperationDescriptor {
            name: "GetThing",
            summary: "",
            method: HttpMethod::Get,
            path: "/things/{thingId}",
            params: &[ParamSpec::path("ThingId", "thingId")],
            outputs: &["Thing"],
            default_select: Some("Thing"),
            mutating: false,
            deprecated: None,
        };
        let mut ctx = InvocationContext::new(&GET_THING);
        ctx.bind("ThingId", ParamValue::String(String::new())).unwrap();
        assert!(matches!(
            build_request(&ctx),
            Err(Error::InvalidParameterValue { .. })
        ));
    }

    fn sample_value(kind: ParamKind) -> ParamValue {
        match kind {
            ParamKind::String => ParamValue::String("x".into()),
            ParamKind::Integer => ParamValue::Integer(1),
            ParamKind::Boolean => ParamValue::Boolean(true),
            ParamKind::StringList => ParamValue::StringList(vec!["x".into()]),
            ParamKind::Map => ParamValue::parse_map("m", ["k=v"]).unwrap(),
            ParamKind::Json => ParamValue::Json(json!({})),
        }
    }
}
