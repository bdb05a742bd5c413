use aws_smithy_types::error::operation::SerializationError;

const ROUTE53_NS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

/// Serializes the body of a `ChangeResourceRecordSets` request.
pub fn serialize_operation_change_resource_record_sets(
    input: &crate::input::ChangeResourceRecordSetsInput,
) -> Result<String, SerializationError> {
    let mut out = String::new();
    {
        let mut writer = aws_smithy_xml::encode::XmlWriter::new(&mut out);
        let root = writer.start_el("ChangeResourceRecordSetsRequest").write_ns(ROUTE53_NS, None);
        #[allow(unused_mut)]
        let mut scope = root.finish();
        if let Some(var_1) = &input.change_batch {
            let inner_writer = scope.start_el("ChangeBatch");
            crate::xml_ser::serialize_structure_change_batch(var_1, inner_writer)?;
        }
    }
    Ok(out)
}

/// Serializes the body of a `CreateHostedZone` request.
pub fn serialize_operation_create_hosted_zone(
    input: &crate::input::CreateHostedZoneInput,
) -> Result<String, SerializationError> {
    let mut out = String::new();
    {
        let mut writer = aws_smithy_xml::encode::XmlWriter::new(&mut out);
        let root = writer.start_el("CreateHostedZoneRequest").write_ns(ROUTE53_NS, None);
        #[allow(unused_mut)]
        let mut scope = root.finish();
        if let Some(var_1) = &input.name {
            let mut inner_writer = scope.start_el("Name").finish();
            inner_writer.data(var_1.as_str());
        }
        if let Some(var_2) = &input.vpc {
            let inner_writer = scope.start_el("VPC");
            crate::xml_ser::serialize_structure_vpc(var_2, inner_writer)?;
        }
        if let Some(var_3) = &input.caller_reference {
            let mut inner_writer = scope.start_el("CallerReference").finish();
            inner_writer.data(var_3.as_str());
        }
        if let Some(var_4) = &input.hosted_zone_config {
            let inner_writer = scope.start_el("HostedZoneConfig");
            crate::xml_ser::serialize_structure_hosted_zone_config(var_4, inner_writer)?;
        }
        if let Some(var_5) = &input.delegation_set_id {
            let mut inner_writer = scope.start_el("DelegationSetId").finish();
            inner_writer.data(var_5.as_str());
        }
    }
    Ok(out)
}

/// Serializes the body of a `UpdateHealthCheck` request.
pub fn serialize_operation_update_health_check(
    input: &crate::input::UpdateHealthCheckInput,
) -> Result<String, SerializationError> {
    let mut out = String::new();
    {
        let mut writer = aws_smithy_xml::encode::XmlWriter::new(&mut out);
        let root = writer.start_el("UpdateHealthCheckRequest").write_ns(ROUTE53_NS, None);
        #[allow(unused_mut)]
        let mut scope = root.finish();
        if let Some(var_1) = &input.health_check_version {
            let mut inner_writer = scope.start_el("HealthCheckVersion").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_1).encode());
        }
        if let Some(var_2) = &input.ip_address {
            let mut inner_writer = scope.start_el("IPAddress").finish();
            inner_writer.data(var_2.as_str());
        }
        if let Some(var_3) = &input.port {
            let mut inner_writer = scope.start_el("Port").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_3).encode());
        }
        if let Some(var_4) = &input.resource_path {
            let mut inner_writer = scope.start_el("ResourcePath").finish();
            inner_writer.data(var_4.as_str());
        }
        if let Some(var_5) = &input.fully_qualified_domain_name {
            let mut inner_writer = scope.start_el("FullyQualifiedDomainName").finish();
            inner_writer.data(var_5.as_str());
        }
        if let Some(var_6) = &input.search_string {
            let mut inner_writer = scope.start_el("SearchString").finish();
            inner_writer.data(var_6.as_str());
        }
        if let Some(var_7) = &input.failure_threshold {
            let mut inner_writer = scope.start_el("FailureThreshold").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_7).encode());
        }
        if let Some(var_8) = &input.inverted {
            let mut inner_writer = scope.start_el("Inverted").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_8).encode());
        }
        if let Some(var_9) = &input.disabled {
            let mut inner_writer = scope.start_el("Disabled").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_9).encode());
        }
        if let Some(var_10) = &input.health_threshold {
            let mut inner_writer = scope.start_el("HealthThreshold").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_10).encode());
        }
        if let Some(var_11) = &input.child_health_checks {
            let mut inner_writer = scope.start_el("ChildHealthChecks").finish();
            for list_item in var_11 {
                let mut element_writer = inner_writer.start_el("ChildHealthCheck").finish();
                element_writer.data(list_item.as_str());
            }
        }
        if let Some(var_12) = &input.enable_sni {
            let mut inner_writer = scope.start_el("EnableSNI").finish();
            inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_12).encode());
        }
        if let Some(var_13) = &input.regions {
            let mut inner_writer = scope.start_el("Regions").finish();
            for list_item in var_13 {
                let mut element_writer = inner_writer.start_el("Region").finish();
                element_writer.data(list_item.as_str());
            }
        }
        if let Some(var_14) = &input.alarm_identifier {
            let inner_writer = scope.start_el("AlarmIdentifier");
            crate::xml_ser::serialize_structure_alarm_identifier(var_14, inner_writer)?;
        }
        if let Some(var_15) = &input.insufficient_data_health_status {
            let mut inner_writer = scope.start_el("InsufficientDataHealthStatus").finish();
            inner_writer.data(var_15.as_str());
        }
        if let Some(var_16) = &input.reset_elements {
            let mut inner_writer = scope.start_el("ResetElements").finish();
            for list_item in var_16 {
                let mut element_writer = inner_writer.start_el("ResettableElementName").finish();
                element_writer.data(list_item.as_str());
            }
        }
    }
    Ok(out)
}

pub fn serialize_structure_alarm_identifier(
    input: &crate::model::AlarmIdentifier,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.region {
        let mut inner_writer = scope.start_el("Region").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.name {
        let mut inner_writer = scope.start_el("Name").finish();
        inner_writer.data(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_alias_target(
    input: &crate::model::AliasTarget,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.hosted_zone_id {
        let mut inner_writer = scope.start_el("HostedZoneId").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.dns_name {
        let mut inner_writer = scope.start_el("DNSName").finish();
        inner_writer.data(var_2.as_str());
    }
    if let Some(var_3) = &input.evaluate_target_health {
        let mut inner_writer = scope.start_el("EvaluateTargetHealth").finish();
        inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_3).encode());
    }
    Ok(())
}

pub fn serialize_structure_change(
    input: &crate::model::Change,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.action {
        let mut inner_writer = scope.start_el("Action").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.resource_record_set {
        let inner_writer = scope.start_el("ResourceRecordSet");
        crate::xml_ser::serialize_structure_resource_record_set(var_2, inner_writer)?;
    }
    Ok(())
}

pub fn serialize_structure_change_batch(
    input: &crate::model::ChangeBatch,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.comment {
        let mut inner_writer = scope.start_el("Comment").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.changes {
        let mut inner_writer = scope.start_el("Changes").finish();
        for list_item in var_2 {
            let element_writer = inner_writer.start_el("Change");
            crate::xml_ser::serialize_structure_change(list_item, element_writer)?;
        }
    }
    Ok(())
}

pub fn serialize_structure_geo_location(
    input: &crate::model::GeoLocation,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.continent_code {
        let mut inner_writer = scope.start_el("ContinentCode").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.country_code {
        let mut inner_writer = scope.start_el("CountryCode").finish();
        inner_writer.data(var_2.as_str());
    }
    if let Some(var_3) = &input.subdivision_code {
        let mut inner_writer = scope.start_el("SubdivisionCode").finish();
        inner_writer.data(var_3.as_str());
    }
    Ok(())
}

pub fn serialize_structure_hosted_zone_config(
    input: &crate::model::HostedZoneConfig,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.comment {
        let mut inner_writer = scope.start_el("Comment").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.private_zone {
        let mut inner_writer = scope.start_el("PrivateZone").finish();
        inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_2).encode());
    }
    Ok(())
}

pub fn serialize_structure_resource_record(
    input: &crate::model::ResourceRecord,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.value {
        let mut inner_writer = scope.start_el("Value").finish();
        inner_writer.data(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_resource_record_set(
    input: &crate::model::ResourceRecordSet,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.name {
        let mut inner_writer = scope.start_el("Name").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.r#type {
        let mut inner_writer = scope.start_el("Type").finish();
        inner_writer.data(var_2.as_str());
    }
    if let Some(var_3) = &input.set_identifier {
        let mut inner_writer = scope.start_el("SetIdentifier").finish();
        inner_writer.data(var_3.as_str());
    }
    if let Some(var_4) = &input.weight {
        let mut inner_writer = scope.start_el("Weight").finish();
        inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_4).encode());
    }
    if let Some(var_5) = &input.region {
        let mut inner_writer = scope.start_el("Region").finish();
        inner_writer.data(var_5.as_str());
    }
    if let Some(var_6) = &input.geo_location {
        let inner_writer = scope.start_el("GeoLocation");
        crate::xml_ser::serialize_structure_geo_location(var_6, inner_writer)?;
    }
    if let Some(var_7) = &input.failover {
        let mut inner_writer = scope.start_el("Failover").finish();
        inner_writer.data(var_7.as_str());
    }
    if let Some(var_8) = &input.multi_value_answer {
        let mut inner_writer = scope.start_el("MultiValueAnswer").finish();
        inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_8).encode());
    }
    if let Some(var_9) = &input.ttl {
        let mut inner_writer = scope.start_el("TTL").finish();
        inner_writer.data(aws_smithy_types::primitive::Encoder::from(*var_9).encode());
    }
    if let Some(var_10) = &input.resource_records {
        let mut inner_writer = scope.start_el("ResourceRecords").finish();
        for list_item in var_10 {
            let element_writer = inner_writer.start_el("ResourceRecord");
            crate::xml_ser::serialize_structure_resource_record(list_item, element_writer)?;
        }
    }
    if let Some(var_11) = &input.alias_target {
        let inner_writer = scope.start_el("AliasTarget");
        crate::xml_ser::serialize_structure_alias_target(var_11, inner_writer)?;
    }
    if let Some(var_12) = &input.health_check_id {
        let mut inner_writer = scope.start_el("HealthCheckId").finish();
        inner_writer.data(var_12.as_str());
    }
    if let Some(var_13) = &input.traffic_policy_instance_id {
        let mut inner_writer = scope.start_el("TrafficPolicyInstanceId").finish();
        inner_writer.data(var_13.as_str());
    }
    Ok(())
}

pub fn serialize_structure_vpc(
    input: &crate::model::Vpc,
    writer: aws_smithy_xml::encode::ElWriter,
) -> Result<(), SerializationError> {
    #[allow(unused_mut)]
    let mut scope = writer.finish();
    if let Some(var_1) = &input.vpc_region {
        let mut inner_writer = scope.start_el("VPCRegion").finish();
        inner_writer.data(var_1.as_str());
    }
    if let Some(var_2) = &input.vpc_id {
        let mut inner_writer = scope.start_el("VPCId").finish();
        inner_writer.data(var_2.as_str());
    }
    Ok(())
}
