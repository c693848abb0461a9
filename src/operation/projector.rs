//! Response projection
//!
//! Decides what an invocation hands back to the caller: the whole response,
//! one field (or nested path) of it, or one of the bound input parameters.

use serde_json::Value;

use super::context::InvocationContext;
use super::descriptor::OperationDescriptor;
use super::path_extractor::{extract_by_path, path_segments};
use crate::error::{Error, Result};

/// Parsed `--select` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`: the complete response
    All,
    /// A response field or `/`-separated path
    Field(String),
    /// `^Name`: echo the bound value of an input parameter
    Param(String),
}

impl Selector {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        match raw {
            "" => Err(Error::invalid_selector(raw)),
            "*" => Ok(Selector::All),
            _ => match raw.strip_prefix('^') {
                Some("") => Err(Error::invalid_selector(raw)),
                Some(name) => Ok(Selector::Param(name.to_string())),
                None => Ok(Selector::Field(raw.to_string())),
            },
        }
    }

    /// Selector used when the caller did not pass one
    pub fn default_for(descriptor: &OperationDescriptor) -> Self {
        match descriptor.default_select {
            Some(field) => Selector::Field(field.to_string()),
            None => Selector::All,
        }
    }

    /// Checks that need no response, run before anything is sent.
    ///
    /// `^Param` must name a declared parameter. On mutating operations a
    /// field must start with a declared output, so a typo never lets the
    /// change go out and then lose its response.
    pub fn validate(&self, descriptor: &OperationDescriptor) -> Result<()> {
        match self {
            Selector::Param(name) if descriptor.param(name).is_none() => {
                Err(Error::invalid_selector(&format!("^{}", name)))
            }
            Selector::Field(path) if descriptor.mutating => match path_segments(path).first() {
                Some(head) if descriptor.declares_output(head) => Ok(()),
                _ => Err(Error::invalid_selector(path)),
            },
            _ => Ok(()),
        }
    }
}

/// Project a response according to `selector`
pub fn project(ctx: &InvocationContext<'_>, selector: &Selector, response: Value) -> Result<Value> {
    let descriptor = ctx.descriptor();

    match selector {
        Selector::All => Ok(response),
        Selector::Param(name) => {
            selector.validate(descriptor)?;
            Ok(ctx.get(name).map(|v| v.to_json()).unwrap_or(Value::Null))
        }
        Selector::Field(path) => {
            let head = path_segments(path)
                .first()
                .copied()
                .ok_or_else(|| Error::invalid_selector(path))?;

            let present = response.get(head).is_some();
            if !present && !descriptor.declares_output(head) {
                return Err(Error::invalid_selector(path));
            }
            Ok(extract_by_path(&response, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::context::ParamValue;
    use crate::operation::registry::{find_operation, operations};
    use serde_json::json;

    fn list_phone_numbers_response() -> Value {
        json!({
            "PhoneNumbers": [{"PhoneNumberId": "p-1", "Status": "Assigned"}],
            "NextToken": "page-2"
        })
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(Selector::parse("*").unwrap(), Selector::All);
        assert_eq!(
            Selector::parse("^NextToken").unwrap(),
            Selector::Param("NextToken".into())
        );
        assert_eq!(
            Selector::parse("PhoneNumbers").unwrap(),
            Selector::Field("PhoneNumbers".into())
        );
        assert!(Selector::parse("^").is_err());
        assert!(Selector::parse("  ").is_err());
    }

    #[test]
    fn test_star_returns_complete_response() {
        for descriptor in operations() {
            let ctx = InvocationContext::new(descriptor);
            let response = json!({"Anything": [1, 2, 3], "NextToken": "t"});
            let projected = project(&ctx, &Selector::All, response.clone()).unwrap();
            assert_eq!(projected, response, "{}", descriptor.name);
        }
    }

    #[test]
    fn test_default_field() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let projected = project(
            &ctx,
            &Selector::default_for(op),
            list_phone_numbers_response(),
        )
        .unwrap();
        assert_eq!(projected, json!([{"PhoneNumberId": "p-1", "Status": "Assigned"}]));
    }

    #[test]
    fn test_default_without_field_is_whole_response() {
        let op = find_operation("GetPhoneNumberSettings").unwrap();
        assert_eq!(Selector::default_for(op), Selector::All);
    }

    #[test]
    fn test_param_echoes_bound_value_unchanged() {
        let op = find_operation("CreateSipMediaApplicationCall").unwrap();
        let mut ctx = InvocationContext::new(op);
        let headers = ParamValue::parse_map("SipHeaders", ["X-Trace=1", "X-Tenant=acme"]).unwrap();
        ctx.bind("SipHeaders", headers.clone()).unwrap();

        let projected = project(&ctx, &Selector::Param("SipHeaders".into()), json!({})).unwrap();
        assert_eq!(projected, headers.to_json());
    }

    #[test]
    fn test_unbound_param_is_null() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let projected = project(
            &ctx,
            &Selector::Param("Status".into()),
            list_phone_numbers_response(),
        )
        .unwrap();
        assert_eq!(projected, Value::Null);
    }

    #[test]
    fn test_unknown_param_is_invalid() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let err = project(
            &ctx,
            &Selector::Param("Bogus".into()),
            list_phone_numbers_response(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { ref selector } if selector == "^Bogus"));
    }

    #[test]
    fn test_unknown_field_is_invalid() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let err = project(
            &ctx,
            &Selector::Field("Bogus".into()),
            list_phone_numbers_response(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[test]
    fn test_declared_but_absent_field_is_null() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let projected = project(
            &ctx,
            &Selector::Field("NextToken".into()),
            json!({"PhoneNumbers": []}),
        )
        .unwrap();
        assert_eq!(projected, Value::Null);
    }

    #[test]
    fn test_undeclared_but_present_field_is_returned() {
        let op = find_operation("GetPhoneNumber").unwrap();
        let ctx = InvocationContext::new(op);
        let projected = project(
            &ctx,
            &Selector::Field("ResponseMetadata".into()),
            json!({"PhoneNumber": {}, "ResponseMetadata": {"RequestId": "r"}}),
        )
        .unwrap();
        assert_eq!(projected, json!({"RequestId": "r"}));
    }

    #[test]
    fn test_mutating_field_must_be_declared_output() {
        let op = find_operation("CreateVoiceConnector").unwrap();
        assert!(Selector::Field("VoiceConnector".into()).validate(op).is_ok());
        assert!(Selector::Field("VoiceConnector/VoiceConnectorId".into())
            .validate(op)
            .is_ok());

        let err = Selector::Field("VoiceConector".into())
            .validate(op)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { ref selector } if selector == "VoiceConector"));
    }

    #[test]
    fn test_read_only_field_checked_against_response() {
        let op = find_operation("GetPhoneNumber").unwrap();
        assert!(Selector::Field("ResponseMetadata".into()).validate(op).is_ok());
    }

    #[test]
    fn test_nested_field_path() {
        let op = find_operation("ListPhoneNumbers").unwrap();
        let ctx = InvocationContext::new(op);
        let projected = project(
            &ctx,
            &Selector::Field("PhoneNumbers/Status".into()),
            list_phone_numbers_response(),
        )
        .unwrap();
        assert_eq!(projected, json!(["Assigned"]));
    }
}
