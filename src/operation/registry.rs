//! Chime SDK Voice operation table
//!
//! One [`OperationDescriptor`] per API operation. The dispatcher is generic
//! over this table; adding an operation means adding an entry here.

use super::descriptor::HttpMethod::{Delete, Get, Post, Put};
use super::descriptor::ParamKind as K;
use super::descriptor::{OperationDescriptor, ParamSpec as P};

const MAX_RESULTS: P = P::query("MaxResults", "max-results", K::Integer);
const NEXT_TOKEN: P = P::query("NextToken", "next-token", K::String);

const PHONE_NUMBER_ID: P = P::path("PhoneNumberId", "phoneNumberId");
const VOICE_CONNECTOR_ID: P = P::path("VoiceConnectorId", "voiceConnectorId");
const VOICE_CONNECTOR_GROUP_ID: P = P::path("VoiceConnectorGroupId", "voiceConnectorGroupId");
const SIP_RULE_ID: P = P::path("SipRuleId", "sipRuleId");
const SIP_MEDIA_APPLICATION_ID: P = P::path("SipMediaApplicationId", "sipMediaApplicationId");

static OPERATIONS: &[OperationDescriptor] = &[
    // Phone numbers
    OperationDescriptor {
        name: "ListPhoneNumbers",
        summary: "List phone numbers for the account",
        method: Get,
        path: "/phone-numbers",
        params: &[
            P::query("Status", "status", K::String),
            P::query("ProductType", "product-type", K::String),
            P::query("FilterName", "filter-name", K::String),
            P::query("FilterValue", "filter-value", K::String),
            MAX_RESULTS,
            NEXT_TOKEN,
        ],
        outputs: &["PhoneNumbers", "NextToken"],
        default_select: Some("PhoneNumbers"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetPhoneNumber",
        summary: "Get details for a phone number",
        method: Get,
        path: "/phone-numbers/{phoneNumberId}",
        params: &[PHONE_NUMBER_ID],
        outputs: &["PhoneNumber"],
        default_select: Some("PhoneNumber"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdatePhoneNumber",
        summary: "Update the product type, calling name or name of a phone number",
        method: Post,
        path: "/phone-numbers/{phoneNumberId}",
        params: &[
            PHONE_NUMBER_ID,
            P::body("ProductType", K::String),
            P::body("CallingName", K::String),
            P::body("Name", K::String),
        ],
        outputs: &["PhoneNumber"],
        default_select: Some("PhoneNumber"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DeletePhoneNumber",
        summary: "Move a phone number to the deletion queue",
        method: Delete,
        path: "/phone-numbers/{phoneNumberId}",
        params: &[PHONE_NUMBER_ID],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "RestorePhoneNumber",
        summary: "Restore a phone number from the deletion queue",
        method: Post,
        path: "/phone-numbers/{phoneNumberId}?operation=restore",
        params: &[PHONE_NUMBER_ID],
        outputs: &["PhoneNumber"],
        default_select: Some("PhoneNumber"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "BatchDeletePhoneNumber",
        summary: "Move up to 50 phone numbers to the deletion queue",
        method: Post,
        path: "/phone-numbers?operation=batch-delete",
        params: &[P::body("PhoneNumberIds", K::StringList).required()],
        outputs: &["PhoneNumberErrors"],
        default_select: Some("PhoneNumberErrors"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "BatchUpdatePhoneNumber",
        summary: "Update up to 50 phone numbers",
        method: Post,
        path: "/phone-numbers?operation=batch-update",
        params: &[P::body("UpdatePhoneNumberRequestItems", K::Json).required()],
        outputs: &["PhoneNumberErrors"],
        default_select: Some("PhoneNumberErrors"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "SearchAvailablePhoneNumbers",
        summary: "Search for phone numbers that can be ordered",
        method: Get,
        path: "/search?type=phone-numbers",
        params: &[
            P::query("AreaCode", "area-code", K::String),
            P::query("City", "city", K::String),
            P::query("Country", "country", K::String),
            P::query("State", "state", K::String),
            P::query("TollFreePrefix", "toll-free-prefix", K::String),
            P::query("PhoneNumberType", "phone-number-type", K::String),
            MAX_RESULTS,
            NEXT_TOKEN,
        ],
        outputs: &["E164PhoneNumbers", "NextToken"],
        default_select: Some("E164PhoneNumbers"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListSupportedPhoneNumberCountries",
        summary: "List countries you can order phone numbers from",
        method: Get,
        path: "/phone-number-countries",
        params: &[P::query("ProductType", "product-type", K::String).required()],
        outputs: &["PhoneNumberCountries"],
        default_select: Some("PhoneNumberCountries"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetPhoneNumberSettings",
        summary: "Get the default outbound calling name",
        method: Get,
        path: "/settings/phone-number",
        params: &[],
        outputs: &["CallingName", "CallingNameUpdatedTimestamp"],
        default_select: None,
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdatePhoneNumberSettings",
        summary: "Update the default outbound calling name",
        method: Put,
        path: "/settings/phone-number",
        params: &[P::body("CallingName", K::String).required()],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    // Phone number orders
    OperationDescriptor {
        name: "CreatePhoneNumberOrder",
        summary: "Order phone numbers",
        method: Post,
        path: "/phone-number-orders",
        params: &[
            P::body("ProductType", K::String).required(),
            P::body("E164PhoneNumbers", K::StringList).required(),
            P::body("Name", K::String),
        ],
        outputs: &["PhoneNumberOrder"],
        default_select: Some("PhoneNumberOrder"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetPhoneNumberOrder",
        summary: "Get details for a phone number order",
        method: Get,
        path: "/phone-number-orders/{phoneNumberOrderId}",
        params: &[P::path("PhoneNumberOrderId", "phoneNumberOrderId")],
        outputs: &["PhoneNumberOrder"],
        default_select: Some("PhoneNumberOrder"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListPhoneNumberOrders",
        summary: "List phone number orders",
        method: Get,
        path: "/phone-number-orders",
        params: &[MAX_RESULTS, NEXT_TOKEN],
        outputs: &["PhoneNumberOrders", "NextToken"],
        default_select: Some("PhoneNumberOrders"),
        mutating: false,
        deprecated: None,
    },
    // Voice connectors
    OperationDescriptor {
        name: "CreateVoiceConnector",
        summary: "Create a voice connector",
        method: Post,
        path: "/voice-connectors",
        params: &[
            P::body("Name", K::String).required(),
            P::body("RequireEncryption", K::Boolean).required(),
            P::body("AwsRegion", K::String),
            P::body("IntegrationType", K::String),
            P::body("NetworkType", K::String),
            P::body("Tags", K::Json),
        ],
        outputs: &["VoiceConnector"],
        default_select: Some("VoiceConnector"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetVoiceConnector",
        summary: "Get details for a voice connector",
        method: Get,
        path: "/voice-connectors/{voiceConnectorId}",
        params: &[VOICE_CONNECTOR_ID],
        outputs: &["VoiceConnector"],
        default_select: Some("VoiceConnector"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdateVoiceConnector",
        summary: "Update a voice connector",
        method: Put,
        path: "/voice-connectors/{voiceConnectorId}",
        params: &[
            VOICE_CONNECTOR_ID,
            P::body("Name", K::String).required(),
            P::body("RequireEncryption", K::Boolean).required(),
        ],
        outputs: &["VoiceConnector"],
        default_select: Some("VoiceConnector"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DeleteVoiceConnector",
        summary: "Delete a voice connector",
        method: Delete,
        path: "/voice-connectors/{voiceConnectorId}",
        params: &[VOICE_CONNECTOR_ID],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListVoiceConnectors",
        summary: "List voice connectors",
        method: Get,
        path: "/voice-connectors",
        params: &[MAX_RESULTS, NEXT_TOKEN],
        outputs: &["VoiceConnectors", "NextToken"],
        default_select: Some("VoiceConnectors"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "AssociatePhoneNumbersWithVoiceConnector",
        summary: "Associate phone numbers with a voice connector",
        method: Post,
        path: "/voice-connectors/{voiceConnectorId}?operation=associate-phone-numbers",
        params: &[
            VOICE_CONNECTOR_ID,
            P::body("E164PhoneNumbers", K::StringList).required(),
            P::body("ForceAssociate", K::Boolean),
        ],
        outputs: &["PhoneNumberErrors"],
        default_select: Some("PhoneNumberErrors"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DisassociatePhoneNumbersFromVoiceConnector",
        summary: "Disassociate phone numbers from a voice connector",
        method: Post,
        path: "/voice-connectors/{voiceConnectorId}?operation=disassociate-phone-numbers",
        params: &[
            VOICE_CONNECTOR_ID,
            P::body("E164PhoneNumbers", K::StringList).required(),
        ],
        outputs: &["PhoneNumberErrors"],
        default_select: Some("PhoneNumberErrors"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetVoiceConnectorTermination",
        summary: "Get termination settings for a voice connector",
        method: Get,
        path: "/voice-connectors/{voiceConnectorId}/termination",
        params: &[VOICE_CONNECTOR_ID],
        outputs: &["Termination"],
        default_select: Some("Termination"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "PutVoiceConnectorTermination",
        summary: "Replace termination settings for a voice connector",
        method: Put,
        path: "/voice-connectors/{voiceConnectorId}/termination",
        params: &[VOICE_CONNECTOR_ID, P::body("Termination", K::Json).required()],
        outputs: &["Termination"],
        default_select: Some("Termination"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListVoiceConnectorTerminationCredentials",
        summary: "List SIP credential user names for a voice connector",
        method: Get,
        path: "/voice-connectors/{voiceConnectorId}/termination/credentials",
        params: &[VOICE_CONNECTOR_ID],
        outputs: &["Usernames"],
        default_select: Some("Usernames"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetVoiceConnectorLoggingConfiguration",
        summary: "Get logging settings for a voice connector",
        method: Get,
        path: "/voice-connectors/{voiceConnectorId}/logging-configuration",
        params: &[VOICE_CONNECTOR_ID],
        outputs: &["LoggingConfiguration"],
        default_select: Some("LoggingConfiguration"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "PutVoiceConnectorLoggingConfiguration",
        summary: "Update logging settings for a voice connector",
        method: Put,
        path: "/voice-connectors/{voiceConnectorId}/logging-configuration",
        params: &[
            VOICE_CONNECTOR_ID,
            P::nested(
                "LoggingConfigurationEnableSIPLogs",
                "LoggingConfiguration.EnableSIPLogs",
                K::Boolean,
            ),
            P::nested(
                "LoggingConfigurationEnableMediaMetricLogs",
                "LoggingConfiguration.EnableMediaMetricLogs",
                K::Boolean,
            ),
        ],
        outputs: &["LoggingConfiguration"],
        default_select: Some("LoggingConfiguration"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListAvailableVoiceConnectorRegions",
        summary: "List regions where voice connectors can be created",
        method: Get,
        path: "/voice-connector-regions",
        params: &[],
        outputs: &["VoiceConnectorRegions"],
        default_select: Some("VoiceConnectorRegions"),
        mutating: false,
        deprecated: None,
    },
    // Voice connector groups
    OperationDescriptor {
        name: "CreateVoiceConnectorGroup",
        summary: "Create a voice connector group",
        method: Post,
        path: "/voice-connector-groups",
        params: &[
            P::body("Name", K::String).required(),
            P::body("VoiceConnectorItems", K::Json),
        ],
        outputs: &["VoiceConnectorGroup"],
        default_select: Some("VoiceConnectorGroup"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetVoiceConnectorGroup",
        summary: "Get details for a voice connector group",
        method: Get,
        path: "/voice-connector-groups/{voiceConnectorGroupId}",
        params: &[VOICE_CONNECTOR_GROUP_ID],
        outputs: &["VoiceConnectorGroup"],
        default_select: Some("VoiceConnectorGroup"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdateVoiceConnectorGroup",
        summary: "Update a voice connector group",
        method: Put,
        path: "/voice-connector-groups/{voiceConnectorGroupId}",
        params: &[
            VOICE_CONNECTOR_GROUP_ID,
            P::body("Name", K::String).required(),
            P::body("VoiceConnectorItems", K::Json).required(),
        ],
        outputs: &["VoiceConnectorGroup"],
        default_select: Some("VoiceConnectorGroup"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DeleteVoiceConnectorGroup",
        summary: "Delete a voice connector group",
        method: Delete,
        path: "/voice-connector-groups/{voiceConnectorGroupId}",
        params: &[VOICE_CONNECTOR_GROUP_ID],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListVoiceConnectorGroups",
        summary: "List voice connector groups",
        method: Get,
        path: "/voice-connector-groups",
        params: &[MAX_RESULTS, NEXT_TOKEN],
        outputs: &["VoiceConnectorGroups", "NextToken"],
        default_select: Some("VoiceConnectorGroups"),
        mutating: false,
        deprecated: None,
    },
    // SIP rules
    OperationDescriptor {
        name: "CreateSipRule",
        summary: "Create a SIP rule",
        method: Post,
        path: "/sip-rules",
        params: &[
            P::body("Name", K::String).required(),
            P::body("TriggerType", K::String).required(),
            P::body("TriggerValue", K::String).required(),
            P::body("Disabled", K::Boolean),
            P::body("TargetApplications", K::Json),
        ],
        outputs: &["SipRule"],
        default_select: Some("SipRule"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetSipRule",
        summary: "Get details for a SIP rule",
        method: Get,
        path: "/sip-rules/{sipRuleId}",
        params: &[SIP_RULE_ID],
        outputs: &["SipRule"],
        default_select: Some("SipRule"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdateSipRule",
        summary: "Update a SIP rule",
        method: Put,
        path: "/sip-rules/{sipRuleId}",
        params: &[
            SIP_RULE_ID,
            P::body("Name", K::String).required(),
            P::body("Disabled", K::Boolean),
            P::body("TargetApplications", K::Json),
        ],
        outputs: &["SipRule"],
        default_select: Some("SipRule"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DeleteSipRule",
        summary: "Delete a SIP rule",
        method: Delete,
        path: "/sip-rules/{sipRuleId}",
        params: &[SIP_RULE_ID],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListSipRules",
        summary: "List SIP rules",
        method: Get,
        path: "/sip-rules",
        params: &[
            P::query("SipMediaApplicationId", "sip-media-application", K::String),
            MAX_RESULTS,
            NEXT_TOKEN,
        ],
        outputs: &["SipRules", "NextToken"],
        default_select: Some("SipRules"),
        mutating: false,
        deprecated: None,
    },
    // SIP media applications
    OperationDescriptor {
        name: "CreateSipMediaApplication",
        summary: "Create a SIP media application",
        method: Post,
        path: "/sip-media-applications",
        params: &[
            P::body("AwsRegion", K::String).required(),
            P::body("Name", K::String).required(),
            P::body("Endpoints", K::Json).required(),
            P::body("Tags", K::Json),
        ],
        outputs: &["SipMediaApplication"],
        default_select: Some("SipMediaApplication"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "GetSipMediaApplication",
        summary: "Get details for a SIP media application",
        method: Get,
        path: "/sip-media-applications/{sipMediaApplicationId}",
        params: &[SIP_MEDIA_APPLICATION_ID],
        outputs: &["SipMediaApplication"],
        default_select: Some("SipMediaApplication"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdateSipMediaApplication",
        summary: "Update a SIP media application",
        method: Put,
        path: "/sip-media-applications/{sipMediaApplicationId}",
        params: &[
            SIP_MEDIA_APPLICATION_ID,
            P::body("Name", K::String),
            P::body("Endpoints", K::Json),
        ],
        outputs: &["SipMediaApplication"],
        default_select: Some("SipMediaApplication"),
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "DeleteSipMediaApplication",
        summary: "Delete a SIP media application",
        method: Delete,
        path: "/sip-media-applications/{sipMediaApplicationId}",
        params: &[SIP_MEDIA_APPLICATION_ID],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "ListSipMediaApplications",
        summary: "List SIP media applications",
        method: Get,
        path: "/sip-media-applications",
        params: &[MAX_RESULTS, NEXT_TOKEN],
        outputs: &["SipMediaApplications", "NextToken"],
        default_select: Some("SipMediaApplications"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "CreateSipMediaApplicationCall",
        summary: "Start an outbound call from a SIP media application",
        method: Post,
        path: "/sip-media-applications/{sipMediaApplicationId}/calls",
        params: &[
            SIP_MEDIA_APPLICATION_ID,
            P::body("FromPhoneNumber", K::String).required(),
            P::body("ToPhoneNumber", K::String).required(),
            P::body("SipHeaders", K::Map),
            P::body("ArgumentsMap", K::Map),
        ],
        outputs: &["SipMediaApplicationCall"],
        default_select: Some("SipMediaApplicationCall"),
        mutating: true,
        deprecated: None,
    },
    // Global settings
    OperationDescriptor {
        name: "GetGlobalSettings",
        summary: "Get global voice connector settings",
        method: Get,
        path: "/settings",
        params: &[],
        outputs: &["VoiceConnector"],
        default_select: Some("VoiceConnector"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UpdateGlobalSettings",
        summary: "Update global voice connector settings",
        method: Put,
        path: "/settings",
        params: &[P::nested(
            "VoiceConnectorCdrBucket",
            "VoiceConnector.CdrBucket",
            K::String,
        )],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    // Tags
    OperationDescriptor {
        name: "ListTagsForResource",
        summary: "List tags on a resource",
        method: Get,
        path: "/tags",
        params: &[P::query("ResourceARN", "arn", K::String).required()],
        outputs: &["Tags"],
        default_select: Some("Tags"),
        mutating: false,
        deprecated: None,
    },
    OperationDescriptor {
        name: "TagResource",
        summary: "Add tags to a resource",
        method: Post,
        path: "/tags?operation=tag-resource",
        params: &[
            P::body("ResourceARN", K::String).required(),
            P::body("Tags", K::Json).required(),
        ],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
    OperationDescriptor {
        name: "UntagResource",
        summary: "Remove tags from a resource",
        method: Post,
        path: "/tags?operation=untag-resource",
        params: &[
            P::body("ResourceARN", K::String).required(),
            P::body("TagKeys", K::StringList).required(),
        ],
        outputs: &[],
        default_select: None,
        mutating: true,
        deprecated: None,
    },
];

/// All registered operations
pub fn operations() -> &'static [OperationDescriptor] {
    OPERATIONS
}

/// Look up an operation by API name (`ListPhoneNumbers`) or command name
/// (`list-phone-numbers`)
pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS
        .iter()
        .find(|op| op.name == name || op.command_name() == name)
}
