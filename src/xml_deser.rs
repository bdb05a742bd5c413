/// Extracts the error code, message, and request ID from an `ErrorResponse` body.
pub fn deser_error_metadata(
    inp: &[u8],
) -> Result<aws_smithy_types::error::ErrorMetadata, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    let mut root = doc.root_element()?;
    let mut err_builder = aws_smithy_types::error::ErrorMetadata::builder();
    while let Some(mut tag) = root.next_tag() {
        match tag.start_el() {
            s if s.matches("Error") => {
                while let Some(mut error_field) = tag.next_tag() {
                    match error_field.start_el() {
                        s if s.matches("Code") => {
                            err_builder = err_builder.code(
                                aws_smithy_xml::decode::try_data(&mut error_field)?.as_ref(),
                            );
                        }
                        s if s.matches("Message") => {
                            err_builder = err_builder.message(
                                aws_smithy_xml::decode::try_data(&mut error_field)?.as_ref(),
                            );
                        }
                        _ => {}
                    }
                }
            }
            s if s.matches("RequestId") => {
                err_builder = err_builder.custom(
                    "aws_request_id",
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                );
            }
            _ => {}
        }
    }
    Ok(err_builder.build())
}

/// Deserializes the body of a `ChangeResourceRecordSets` response into the output builder.
pub fn deser_operation_change_resource_record_sets(
    inp: &[u8],
    mut builder: crate::output::change_resource_record_sets_output::Builder,
) -> Result<crate::output::change_resource_record_sets_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ChangeInfo") => {
                builder = builder.set_change_info(Some(crate::xml_deser::deser_structure_change_info(
                    &mut tag,
                )?));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `CreateHostedZone` response into the output builder.
pub fn deser_operation_create_hosted_zone(
    inp: &[u8],
    mut builder: crate::output::create_hosted_zone_output::Builder,
) -> Result<crate::output::create_hosted_zone_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("HostedZone") => {
                builder = builder.set_hosted_zone(Some(crate::xml_deser::deser_structure_hosted_zone(
                    &mut tag,
                )?));
            }
            s if s.matches("ChangeInfo") => {
                builder = builder.set_change_info(Some(crate::xml_deser::deser_structure_change_info(
                    &mut tag,
                )?));
            }
            s if s.matches("DelegationSet") => {
                builder = builder.set_delegation_set(Some(crate::xml_deser::deser_structure_delegation_set(
                    &mut tag,
                )?));
            }
            s if s.matches("VPC") => {
                builder = builder.set_vpc(Some(crate::xml_deser::deser_structure_vpc(
                    &mut tag,
                )?));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListGeoLocations` response into the output builder.
pub fn deser_operation_list_geo_locations(
    inp: &[u8],
    mut builder: crate::output::list_geo_locations_output::Builder,
) -> Result<crate::output::list_geo_locations_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("GeoLocationDetailsList") => {
                builder = builder.set_geo_location_details_list(Some(crate::xml_deser::deser_list_geo_location_details_list(&mut tag)?));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("NextContinentCode") => {
                builder = builder.set_next_continent_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("NextCountryCode") => {
                builder = builder.set_next_country_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("NextSubdivisionCode") => {
                builder = builder.set_next_subdivision_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListHostedZonesByName` response into the output builder.
pub fn deser_operation_list_hosted_zones_by_name(
    inp: &[u8],
    mut builder: crate::output::list_hosted_zones_by_name_output::Builder,
) -> Result<crate::output::list_hosted_zones_by_name_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("HostedZones") => {
                builder = builder.set_hosted_zones(Some(crate::xml_deser::deser_list_hosted_zones(&mut tag)?));
            }
            s if s.matches("DNSName") => {
                builder = builder.set_dns_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("HostedZoneId") => {
                builder = builder.set_hosted_zone_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("NextDNSName") => {
                builder = builder.set_next_dns_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("NextHostedZoneId") => {
                builder = builder.set_next_hosted_zone_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListResourceRecordSets` response into the output builder.
pub fn deser_operation_list_resource_record_sets(
    inp: &[u8],
    mut builder: crate::output::list_resource_record_sets_output::Builder,
) -> Result<crate::output::list_resource_record_sets_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ResourceRecordSets") => {
                builder = builder.set_resource_record_sets(Some(crate::xml_deser::deser_list_resource_record_sets(&mut tag)?));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("NextRecordName") => {
                builder = builder.set_next_record_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("NextRecordType") => {
                builder = builder.set_next_record_type(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("NextRecordIdentifier") => {
                builder = builder.set_next_record_identifier(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListTrafficPolicies` response into the output builder.
pub fn deser_operation_list_traffic_policies(
    inp: &[u8],
    mut builder: crate::output::list_traffic_policies_output::Builder,
) -> Result<crate::output::list_traffic_policies_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TrafficPolicySummaries") => {
                builder = builder.set_traffic_policy_summaries(Some(crate::xml_deser::deser_list_traffic_policy_summaries(&mut tag)?));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("TrafficPolicyIdMarker") => {
                builder = builder.set_traffic_policy_id_marker(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListTrafficPolicyInstances` response into the output builder.
pub fn deser_operation_list_traffic_policy_instances(
    inp: &[u8],
    mut builder: crate::output::list_traffic_policy_instances_output::Builder,
) -> Result<crate::output::list_traffic_policy_instances_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TrafficPolicyInstances") => {
                builder = builder.set_traffic_policy_instances(Some(crate::xml_deser::deser_list_traffic_policy_instances(&mut tag)?));
            }
            s if s.matches("HostedZoneIdMarker") => {
                builder = builder.set_hosted_zone_id_marker(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyInstanceNameMarker") => {
                builder = builder.set_traffic_policy_instance_name_marker(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyInstanceTypeMarker") => {
                builder = builder.set_traffic_policy_instance_type_marker(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `ListTrafficPolicyInstancesByHostedZone` response into the output builder.
pub fn deser_operation_list_traffic_policy_instances_by_hosted_zone(
    inp: &[u8],
    mut builder: crate::output::list_traffic_policy_instances_by_hosted_zone_output::Builder,
) -> Result<crate::output::list_traffic_policy_instances_by_hosted_zone_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TrafficPolicyInstances") => {
                builder = builder.set_traffic_policy_instances(Some(crate::xml_deser::deser_list_traffic_policy_instances(&mut tag)?));
            }
            s if s.matches("TrafficPolicyInstanceNameMarker") => {
                builder = builder.set_traffic_policy_instance_name_marker(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyInstanceTypeMarker") => {
                builder = builder.set_traffic_policy_instance_type_marker(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("IsTruncated") => {
                builder = builder.set_is_truncated(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `IsTruncated`)")
                    })?,
                ));
            }
            s if s.matches("MaxItems") => {
                builder = builder.set_max_items(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `MaxItems`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder)
}

/// Deserializes the body of a `UpdateHealthCheck` response into the output builder.
pub fn deser_operation_update_health_check(
    inp: &[u8],
    mut builder: crate::output::update_health_check_output::Builder,
) -> Result<crate::output::update_health_check_output::Builder, aws_smithy_xml::decode::XmlDecodeError> {
    let mut doc = aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("HealthCheck") => {
                builder = builder.set_health_check(Some(crate::xml_deser::deser_structure_health_check(
                    &mut tag,
                )?));
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_alarm_identifier(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::AlarmIdentifier, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::AlarmIdentifier::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Region") => {
                builder = builder.set_region(Some(crate::model::CloudWatchRegion::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_alias_target(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::AliasTarget, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::AliasTarget::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("HostedZoneId") => {
                builder = builder.set_hosted_zone_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("DNSName") => {
                builder = builder.set_dns_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("EvaluateTargetHealth") => {
                builder = builder.set_evaluate_target_health(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `EvaluateTargetHealth`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_change_info(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::ChangeInfo, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::ChangeInfo::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Status") => {
                builder = builder.set_status(Some(crate::model::ChangeStatus::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("SubmittedAt") => {
                builder = builder.set_submitted_at(Some(
                    aws_smithy_types::DateTime::from_str(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        aws_smithy_types::date_time::Format::DateTimeWithOffset,
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (timestamp: `SubmittedAt`)")
                    })?,
                ));
            }
            s if s.matches("Comment") => {
                builder = builder.set_comment(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_cloud_watch_alarm_configuration(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::CloudWatchAlarmConfiguration, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::CloudWatchAlarmConfiguration::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("EvaluationPeriods") => {
                builder = builder.set_evaluation_periods(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `EvaluationPeriods`)")
                    })?,
                ));
            }
            s if s.matches("Threshold") => {
                builder = builder.set_threshold(Some(
                    <f64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (double: `Threshold`)")
                    })?,
                ));
            }
            s if s.matches("ComparisonOperator") => {
                builder = builder.set_comparison_operator(Some(crate::model::ComparisonOperator::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("Period") => {
                builder = builder.set_period(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `Period`)")
                    })?,
                ));
            }
            s if s.matches("MetricName") => {
                builder = builder.set_metric_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Namespace") => {
                builder = builder.set_namespace(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Statistic") => {
                builder = builder.set_statistic(Some(crate::model::Statistic::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("Dimensions") => {
                builder = builder.set_dimensions(Some(crate::xml_deser::deser_list_dimension_list(&mut tag)?));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_delegation_set(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::DelegationSet, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::DelegationSet::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CallerReference") => {
                builder = builder.set_caller_reference(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("NameServers") => {
                builder = builder.set_name_servers(Some(crate::xml_deser::deser_list_delegation_set_name_servers(&mut tag)?));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_dimension(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::Dimension, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::Dimension::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Value") => {
                builder = builder.set_value(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_geo_location(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::GeoLocation, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::GeoLocation::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ContinentCode") => {
                builder = builder.set_continent_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CountryCode") => {
                builder = builder.set_country_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("SubdivisionCode") => {
                builder = builder.set_subdivision_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_geo_location_details(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::GeoLocationDetails, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::GeoLocationDetails::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ContinentCode") => {
                builder = builder.set_continent_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("ContinentName") => {
                builder = builder.set_continent_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CountryCode") => {
                builder = builder.set_country_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CountryName") => {
                builder = builder.set_country_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("SubdivisionCode") => {
                builder = builder.set_subdivision_code(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("SubdivisionName") => {
                builder = builder.set_subdivision_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_health_check(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::HealthCheck, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::HealthCheck::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CallerReference") => {
                builder = builder.set_caller_reference(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("LinkedService") => {
                builder = builder.set_linked_service(Some(crate::xml_deser::deser_structure_linked_service(
                    &mut tag,
                )?));
            }
            s if s.matches("HealthCheckConfig") => {
                builder = builder.set_health_check_config(Some(crate::xml_deser::deser_structure_health_check_config(
                    &mut tag,
                )?));
            }
            s if s.matches("HealthCheckVersion") => {
                builder = builder.set_health_check_version(Some(
                    <i64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (long: `HealthCheckVersion`)")
                    })?,
                ));
            }
            s if s.matches("CloudWatchAlarmConfiguration") => {
                builder = builder.set_cloud_watch_alarm_configuration(Some(crate::xml_deser::deser_structure_cloud_watch_alarm_configuration(
                    &mut tag,
                )?));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_health_check_config(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::HealthCheckConfig, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::HealthCheckConfig::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("IPAddress") => {
                builder = builder.set_ip_address(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Port") => {
                builder = builder.set_port(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `Port`)")
                    })?,
                ));
            }
            s if s.matches("Type") => {
                builder = builder.set_type(Some(crate::model::HealthCheckType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("ResourcePath") => {
                builder = builder.set_resource_path(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("FullyQualifiedDomainName") => {
                builder = builder.set_fully_qualified_domain_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("SearchString") => {
                builder = builder.set_search_string(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("RequestInterval") => {
                builder = builder.set_request_interval(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `RequestInterval`)")
                    })?,
                ));
            }
            s if s.matches("FailureThreshold") => {
                builder = builder.set_failure_threshold(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `FailureThreshold`)")
                    })?,
                ));
            }
            s if s.matches("MeasureLatency") => {
                builder = builder.set_measure_latency(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `MeasureLatency`)")
                    })?,
                ));
            }
            s if s.matches("Inverted") => {
                builder = builder.set_inverted(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `Inverted`)")
                    })?,
                ));
            }
            s if s.matches("Disabled") => {
                builder = builder.set_disabled(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `Disabled`)")
                    })?,
                ));
            }
            s if s.matches("HealthThreshold") => {
                builder = builder.set_health_threshold(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `HealthThreshold`)")
                    })?,
                ));
            }
            s if s.matches("ChildHealthChecks") => {
                builder = builder.set_child_health_checks(Some(crate::xml_deser::deser_list_child_health_check_list(&mut tag)?));
            }
            s if s.matches("EnableSNI") => {
                builder = builder.set_enable_sni(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `EnableSNI`)")
                    })?,
                ));
            }
            s if s.matches("Regions") => {
                builder = builder.set_regions(Some(crate::xml_deser::deser_list_health_check_regions(&mut tag)?));
            }
            s if s.matches("AlarmIdentifier") => {
                builder = builder.set_alarm_identifier(Some(crate::xml_deser::deser_structure_alarm_identifier(
                    &mut tag,
                )?));
            }
            s if s.matches("InsufficientDataHealthStatus") => {
                builder = builder.set_insufficient_data_health_status(Some(crate::model::InsufficientDataHealthStatus::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_hosted_zone(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::HostedZone, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::HostedZone::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("CallerReference") => {
                builder = builder.set_caller_reference(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Config") => {
                builder = builder.set_config(Some(crate::xml_deser::deser_structure_hosted_zone_config(
                    &mut tag,
                )?));
            }
            s if s.matches("ResourceRecordSetCount") => {
                builder = builder.set_resource_record_set_count(Some(
                    <i64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (long: `ResourceRecordSetCount`)")
                    })?,
                ));
            }
            s if s.matches("LinkedService") => {
                builder = builder.set_linked_service(Some(crate::xml_deser::deser_structure_linked_service(
                    &mut tag,
                )?));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_hosted_zone_config(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::HostedZoneConfig, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::HostedZoneConfig::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Comment") => {
                builder = builder.set_comment(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("PrivateZone") => {
                builder = builder.set_private_zone(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `PrivateZone`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_linked_service(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::LinkedService, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::LinkedService::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ServicePrincipal") => {
                builder = builder.set_service_principal(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Description") => {
                builder = builder.set_description(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_resource_record(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::ResourceRecord, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::ResourceRecord::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Value") => {
                builder = builder.set_value(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_resource_record_set(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::ResourceRecordSet, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::ResourceRecordSet::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Type") => {
                builder = builder.set_type(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("SetIdentifier") => {
                builder = builder.set_set_identifier(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Weight") => {
                builder = builder.set_weight(Some(
                    <i64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (long: `Weight`)")
                    })?,
                ));
            }
            s if s.matches("Region") => {
                builder = builder.set_region(Some(crate::model::ResourceRecordSetRegion::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("GeoLocation") => {
                builder = builder.set_geo_location(Some(crate::xml_deser::deser_structure_geo_location(
                    &mut tag,
                )?));
            }
            s if s.matches("Failover") => {
                builder = builder.set_failover(Some(crate::model::ResourceRecordSetFailover::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("MultiValueAnswer") => {
                builder = builder.set_multi_value_answer(Some(
                    <bool as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (boolean: `MultiValueAnswer`)")
                    })?,
                ));
            }
            s if s.matches("TTL") => {
                builder = builder.set_ttl(Some(
                    <i64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (long: `TTL`)")
                    })?,
                ));
            }
            s if s.matches("ResourceRecords") => {
                builder = builder.set_resource_records(Some(crate::xml_deser::deser_list_resource_records(&mut tag)?));
            }
            s if s.matches("AliasTarget") => {
                builder = builder.set_alias_target(Some(crate::xml_deser::deser_structure_alias_target(
                    &mut tag,
                )?));
            }
            s if s.matches("HealthCheckId") => {
                builder = builder.set_health_check_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyInstanceId") => {
                builder = builder.set_traffic_policy_instance_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_traffic_policy_instance(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::TrafficPolicyInstance, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::TrafficPolicyInstance::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("HostedZoneId") => {
                builder = builder.set_hosted_zone_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TTL") => {
                builder = builder.set_ttl(Some(
                    <i64 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (long: `TTL`)")
                    })?,
                ));
            }
            s if s.matches("State") => {
                builder = builder.set_state(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Message") => {
                builder = builder.set_message(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyId") => {
                builder = builder.set_traffic_policy_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("TrafficPolicyVersion") => {
                builder = builder.set_traffic_policy_version(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `TrafficPolicyVersion`)")
                    })?,
                ));
            }
            s if s.matches("TrafficPolicyType") => {
                builder = builder.set_traffic_policy_type(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_traffic_policy_summary(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::TrafficPolicySummary, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::TrafficPolicySummary::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Id") => {
                builder = builder.set_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Name") => {
                builder = builder.set_name(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            s if s.matches("Type") => {
                builder = builder.set_type(Some(crate::model::RrType::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("LatestVersion") => {
                builder = builder.set_latest_version(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `LatestVersion`)")
                    })?,
                ));
            }
            s if s.matches("TrafficPolicyCount") => {
                builder = builder.set_traffic_policy_count(Some(
                    <i32 as aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(|_| {
                        aws_smithy_xml::decode::XmlDecodeError::custom("expected (integer: `TrafficPolicyCount`)")
                    })?,
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_structure_vpc(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<crate::model::Vpc, aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::Vpc::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("VPCRegion") => {
                builder = builder.set_vpc_region(Some(crate::model::VpcRegion::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                )));
            }
            s if s.matches("VPCId") => {
                builder = builder.set_vpc_id(Some(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into(),
                ));
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_list_resource_records(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::ResourceRecord>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ResourceRecord") => {
                out.push(crate::xml_deser::deser_structure_resource_record(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_dimension_list(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::Dimension>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Dimension") => {
                out.push(crate::xml_deser::deser_structure_dimension(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_delegation_set_name_servers(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<std::string::String>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("NameServer") => {
                out.push(aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into());
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_child_health_check_list(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<std::string::String>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ChildHealthCheck") => {
                out.push(aws_smithy_xml::decode::try_data(&mut tag)?.as_ref().into());
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_health_check_regions(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::HealthCheckRegion>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Region") => {
                out.push(crate::model::HealthCheckRegion::from(
                    aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                ));
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_hosted_zones(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::HostedZone>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("HostedZone") => {
                out.push(crate::xml_deser::deser_structure_hosted_zone(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_geo_location_details_list(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::GeoLocationDetails>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("GeoLocationDetails") => {
                out.push(crate::xml_deser::deser_structure_geo_location_details(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_resource_record_sets(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::ResourceRecordSet>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ResourceRecordSet") => {
                out.push(crate::xml_deser::deser_structure_resource_record_set(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_traffic_policy_summaries(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::TrafficPolicySummary>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TrafficPolicySummary") => {
                out.push(crate::xml_deser::deser_structure_traffic_policy_summary(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}

pub fn deser_list_traffic_policy_instances(
    decoder: &mut aws_smithy_xml::decode::ScopedDecoder,
) -> Result<std::vec::Vec<crate::model::TrafficPolicyInstance>, aws_smithy_xml::decode::XmlDecodeError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TrafficPolicyInstance") => {
                out.push(crate::xml_deser::deser_structure_traffic_policy_instance(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}
