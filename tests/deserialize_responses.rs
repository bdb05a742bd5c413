use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use route53::model::{ChangeStatus, HealthCheckType, RrType};

#[test]
fn deserialize_change_resource_record_sets_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ChangeResourceRecordSetsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <ChangeInfo>
                <Id>/change/C2682N5HXP0BZ4</Id>
                <Status>PENDING</Status>
                <SubmittedAt>2017-03-15T01:36:41.958Z</SubmittedAt>
                <Comment>Web server for example.com</Comment>
            </ChangeInfo>
        </ChangeResourceRecordSetsResponse>"#;

    let output = route53::xml_deser::deser_operation_change_resource_record_sets(
        body,
        route53::output::ChangeResourceRecordSetsOutput::builder(),
    )
    .expect("valid response")
    .build();

    let change_info = output.change_info().expect("ChangeInfo is present");
    assert_eq!(change_info.id(), Some("/change/C2682N5HXP0BZ4"));
    assert_eq!(change_info.status(), Some(&ChangeStatus::Pending));
    assert_eq!(change_info.comment(), Some("Web server for example.com"));
    let expected = DateTime::from_str("2017-03-15T01:36:41.958Z", Format::DateTimeWithOffset)
        .expect("valid timestamp");
    assert_eq!(change_info.submitted_at(), Some(&expected));
}

#[test]
fn deserialize_create_hosted_zone_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <CreateHostedZoneResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <HostedZone>
                <Id>/hostedzone/Z1PA6795UKMFR9</Id>
                <Name>example.com.</Name>
                <CallerReference>myUniqueIdentifier</CallerReference>
                <Config>
                    <Comment>This is my first hosted zone.</Comment>
                    <PrivateZone>false</PrivateZone>
                </Config>
                <ResourceRecordSetCount>2</ResourceRecordSetCount>
            </HostedZone>
            <ChangeInfo>
                <Id>/change/C1PA6795UKMFR9</Id>
                <Status>PENDING</Status>
                <SubmittedAt>2017-03-15T01:36:41.958Z</SubmittedAt>
            </ChangeInfo>
            <DelegationSet>
                <NameServers>
                    <NameServer>ns-2048.awsdns-64.com</NameServer>
                    <NameServer>ns-2049.awsdns-65.net</NameServer>
                    <NameServer>ns-2050.awsdns-66.org</NameServer>
                    <NameServer>ns-2051.awsdns-67.co.uk</NameServer>
                </NameServers>
            </DelegationSet>
        </CreateHostedZoneResponse>"#;

    let output = route53::xml_deser::deser_operation_create_hosted_zone(
        body,
        route53::output::CreateHostedZoneOutput::builder(),
    )
    .expect("valid response")
    .build();

    let zone = output.hosted_zone().expect("HostedZone is present");
    assert_eq!(zone.id(), Some("/hostedzone/Z1PA6795UKMFR9"));
    assert_eq!(zone.name(), Some("example.com."));
    assert_eq!(zone.resource_record_set_count(), Some(2));
    let config = zone.config().expect("Config is present");
    assert_eq!(config.comment(), Some("This is my first hosted zone."));
    assert_eq!(config.private_zone(), Some(false));

    let name_servers = output
        .delegation_set()
        .and_then(|ds| ds.name_servers())
        .expect("NameServers are present");
    assert_eq!(name_servers.len(), 4);
    assert_eq!(name_servers[0], "ns-2048.awsdns-64.com");
}

#[test]
fn deserialize_list_hosted_zones_by_name_truncated_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListHostedZonesByNameResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <HostedZones>
                <HostedZone>
                    <Id>/hostedzone/Z111111QQQQQQQ</Id>
                    <Name>example.com.</Name>
                    <CallerReference>MyUniqueIdentifier1</CallerReference>
                    <ResourceRecordSetCount>42</ResourceRecordSetCount>
                </HostedZone>
            </HostedZones>
            <IsTruncated>true</IsTruncated>
            <NextDNSName>example2.com.</NextDNSName>
            <NextHostedZoneId>Z222222VVVVVVV</NextHostedZoneId>
            <MaxItems>1</MaxItems>
        </ListHostedZonesByNameResponse>"#;

    let output = route53::xml_deser::deser_operation_list_hosted_zones_by_name(
        body,
        route53::output::ListHostedZonesByNameOutput::builder(),
    )
    .expect("valid response")
    .build();

    let zones = output.hosted_zones().expect("HostedZones are present");
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name(), Some("example.com."));
    assert_eq!(output.max_items(), Some(1));

    // When the listing is truncated, the continuation markers are present.
    assert_eq!(output.is_truncated(), Some(true));
    assert_eq!(output.next_dns_name(), Some("example2.com."));
    assert_eq!(output.next_hosted_zone_id(), Some("Z222222VVVVVVV"));
}

#[test]
fn deserialize_list_resource_record_sets_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListResourceRecordSetsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <ResourceRecordSets>
                <ResourceRecordSet>
                    <Name>example.com.</Name>
                    <Type>SOA</Type>
                    <TTL>900</TTL>
                    <ResourceRecords>
                        <ResourceRecord>
                            <Value>ns-2048.awsdns-64.net. hostmaster.awsdns.com. 1 7200 900 1209600 86400</Value>
                        </ResourceRecord>
                    </ResourceRecords>
                </ResourceRecordSet>
                <ResourceRecordSet>
                    <Name>www.example.com.</Name>
                    <Type>SVCB</Type>
                    <TTL>300</TTL>
                </ResourceRecordSet>
            </ResourceRecordSets>
            <IsTruncated>false</IsTruncated>
            <MaxItems>100</MaxItems>
        </ListResourceRecordSetsResponse>"#;

    let output = route53::xml_deser::deser_operation_list_resource_record_sets(
        body,
        route53::output::ListResourceRecordSetsOutput::builder(),
    )
    .expect("valid response")
    .build();

    let sets = output.resource_record_sets().expect("record sets present");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].r#type(), Some(&RrType::Soa));
    assert_eq!(sets[0].ttl(), Some(900));
    // A record type added after this code was generated still round-trips.
    assert_eq!(sets[1].r#type(), Some(&RrType::Unknown("SVCB".to_owned())));
    assert_eq!(output.is_truncated(), Some(false));
    assert_eq!(output.next_record_name(), None);
}

#[test]
fn deserialize_list_geo_locations_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListGeoLocationsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <GeoLocationDetailsList>
                <GeoLocationDetails>
                    <ContinentCode>NA</ContinentCode>
                    <ContinentName>North America</ContinentName>
                </GeoLocationDetails>
                <GeoLocationDetails>
                    <CountryCode>US</CountryCode>
                    <CountryName>United States</CountryName>
                    <SubdivisionCode>WA</SubdivisionCode>
                    <SubdivisionName>Washington</SubdivisionName>
                </GeoLocationDetails>
            </GeoLocationDetailsList>
            <IsTruncated>true</IsTruncated>
            <NextCountryCode>US</NextCountryCode>
            <NextSubdivisionCode>WI</NextSubdivisionCode>
            <MaxItems>2</MaxItems>
        </ListGeoLocationsResponse>"#;

    let output = route53::xml_deser::deser_operation_list_geo_locations(
        body,
        route53::output::ListGeoLocationsOutput::builder(),
    )
    .expect("valid response")
    .build();

    let details = output
        .geo_location_details_list()
        .expect("details are present");
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].continent_code(), Some("NA"));
    assert_eq!(details[0].continent_name(), Some("North America"));
    assert_eq!(details[1].subdivision_name(), Some("Washington"));
    assert_eq!(output.is_truncated(), Some(true));
    assert_eq!(output.next_country_code(), Some("US"));
    assert_eq!(output.next_subdivision_code(), Some("WI"));
}

#[test]
fn deserialize_list_traffic_policy_instances_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListTrafficPolicyInstancesResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <TrafficPolicyInstances>
                <TrafficPolicyInstance>
                    <Id>ninstance-1</Id>
                    <HostedZoneId>Z1PA6795UKMFR9</HostedZoneId>
                    <Name>www.example.com.</Name>
                    <TTL>300</TTL>
                    <State>Applied</State>
                    <TrafficPolicyId>12345678-abcd-9876-fedc-1a2b3c4de5f6</TrafficPolicyId>
                    <TrafficPolicyVersion>2</TrafficPolicyVersion>
                    <TrafficPolicyType>A</TrafficPolicyType>
                </TrafficPolicyInstance>
            </TrafficPolicyInstances>
            <IsTruncated>false</IsTruncated>
            <MaxItems>100</MaxItems>
        </ListTrafficPolicyInstancesResponse>"#;

    let output = route53::xml_deser::deser_operation_list_traffic_policy_instances(
        body,
        route53::output::ListTrafficPolicyInstancesOutput::builder(),
    )
    .expect("valid response")
    .build();

    let instances = output
        .traffic_policy_instances()
        .expect("instances are present");
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].state(), Some("Applied"));
    assert_eq!(instances[0].traffic_policy_version(), Some(2));
    assert_eq!(instances[0].traffic_policy_type(), Some(&RrType::A));
    assert_eq!(output.is_truncated(), Some(false));
}

#[test]
fn deserialize_update_health_check_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <UpdateHealthCheckResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <HealthCheck>
                <Id>abcdef11-2222-3333-4444-555555fedcba</Id>
                <CallerReference>myUniqueIdentifier</CallerReference>
                <HealthCheckConfig>
                    <IPAddress>192.0.2.17</IPAddress>
                    <Port>443</Port>
                    <Type>HTTPS</Type>
                    <ResourcePath>/docs/route53-health-check.html</ResourcePath>
                    <RequestInterval>30</RequestInterval>
                    <FailureThreshold>3</FailureThreshold>
                    <MeasureLatency>true</MeasureLatency>
                    <Inverted>false</Inverted>
                    <Disabled>false</Disabled>
                    <EnableSNI>true</EnableSNI>
                    <Regions>
                        <Region>us-east-1</Region>
                        <Region>us-west-1</Region>
                        <Region>us-west-2</Region>
                    </Regions>
                </HealthCheckConfig>
                <HealthCheckVersion>3</HealthCheckVersion>
            </HealthCheck>
        </UpdateHealthCheckResponse>"#;

    let output = route53::xml_deser::deser_operation_update_health_check(
        body,
        route53::output::UpdateHealthCheckOutput::builder(),
    )
    .expect("valid response")
    .build();

    let check = output.health_check().expect("HealthCheck is present");
    assert_eq!(check.id(), Some("abcdef11-2222-3333-4444-555555fedcba"));
    assert_eq!(check.health_check_version(), Some(3));
    let config = check.health_check_config().expect("config is present");
    assert_eq!(config.ip_address(), Some("192.0.2.17"));
    assert_eq!(config.port(), Some(443));
    assert_eq!(config.r#type(), Some(&HealthCheckType::Https));
    assert_eq!(config.measure_latency(), Some(true));
    assert_eq!(config.enable_sni(), Some(true));
    assert_eq!(config.regions().map(|r| r.len()), Some(3));
}

#[test]
fn unrecognized_elements_are_ignored() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ChangeResourceRecordSetsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <FutureElement><Nested>ignored</Nested></FutureElement>
            <ChangeInfo>
                <Id>/change/C2682N5HXP0BZ4</Id>
                <Status>INSYNC</Status>
            </ChangeInfo>
        </ChangeResourceRecordSetsResponse>"#;

    let output = route53::xml_deser::deser_operation_change_resource_record_sets(
        body,
        route53::output::ChangeResourceRecordSetsOutput::builder(),
    )
    .expect("valid response")
    .build();

    let change_info = output.change_info().expect("ChangeInfo is present");
    assert_eq!(change_info.status(), Some(&ChangeStatus::Insync));
}

#[test]
fn malformed_scalar_is_an_error() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListHostedZonesByNameResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <MaxItems>not-a-number</MaxItems>
        </ListHostedZonesByNameResponse>"#;

    let result = route53::xml_deser::deser_operation_list_hosted_zones_by_name(
        body,
        route53::output::ListHostedZonesByNameOutput::builder(),
    );
    assert!(result.is_err());
}

#[test]
fn deserialize_list_traffic_policies_truncated_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListTrafficPoliciesResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <TrafficPolicySummaries>
                <TrafficPolicySummary>
                    <Id>12345678-abcd-9876-fedc-1a2b3c4de5f6</Id>
                    <Name>MyTrafficPolicy</Name>
                    <Type>A</Type>
                    <LatestVersion>3</LatestVersion>
                    <TrafficPolicyCount>2</TrafficPolicyCount>
                </TrafficPolicySummary>
            </TrafficPolicySummaries>
            <IsTruncated>true</IsTruncated>
            <TrafficPolicyIdMarker>87654321-dcba-6789-cdef-6f5ed4c3b2a1</TrafficPolicyIdMarker>
            <MaxItems>1</MaxItems>
        </ListTrafficPoliciesResponse>"#;

    let output = route53::xml_deser::deser_operation_list_traffic_policies(
        body,
        route53::output::ListTrafficPoliciesOutput::builder(),
    )
    .expect("valid response")
    .build();

    let summaries = output
        .traffic_policy_summaries()
        .expect("summaries are present");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name(), Some("MyTrafficPolicy"));
    assert_eq!(summaries[0].r#type(), Some(&RrType::A));
    assert_eq!(summaries[0].latest_version(), Some(3));
    assert_eq!(summaries[0].traffic_policy_count(), Some(2));
    assert_eq!(output.max_items(), Some(1));

    // When the listing is truncated, the continuation marker is present.
    assert_eq!(output.is_truncated(), Some(true));
    assert_eq!(
        output.traffic_policy_id_marker(),
        Some("87654321-dcba-6789-cdef-6f5ed4c3b2a1")
    );
}

#[test]
fn deserialize_list_traffic_policy_instances_by_hosted_zone_truncated_response() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListTrafficPolicyInstancesByHostedZoneResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <TrafficPolicyInstances>
                <TrafficPolicyInstance>
                    <Id>instance-1</Id>
                    <HostedZoneId>Z1PA6795UKMFR9</HostedZoneId>
                    <Name>www.example.com.</Name>
                    <TTL>300</TTL>
                    <State>Applied</State>
                    <TrafficPolicyId>12345678-abcd-9876-fedc-1a2b3c4de5f6</TrafficPolicyId>
                    <TrafficPolicyVersion>1</TrafficPolicyVersion>
                    <TrafficPolicyType>A</TrafficPolicyType>
                </TrafficPolicyInstance>
            </TrafficPolicyInstances>
            <TrafficPolicyInstanceNameMarker>www2.example.com.</TrafficPolicyInstanceNameMarker>
            <TrafficPolicyInstanceTypeMarker>AAAA</TrafficPolicyInstanceTypeMarker>
            <IsTruncated>true</IsTruncated>
            <MaxItems>1</MaxItems>
        </ListTrafficPolicyInstancesByHostedZoneResponse>"#;

    let output = route53::xml_deser::deser_operation_list_traffic_policy_instances_by_hosted_zone(
        body,
        route53::output::ListTrafficPolicyInstancesByHostedZoneOutput::builder(),
    )
    .expect("valid response")
    .build();

    let instances = output
        .traffic_policy_instances()
        .expect("instances are present");
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].hosted_zone_id(), Some("Z1PA6795UKMFR9"));
    assert_eq!(instances[0].traffic_policy_type(), Some(&RrType::A));

    // When the listing is truncated, the name and type markers are present.
    assert_eq!(output.is_truncated(), Some(true));
    assert_eq!(
        output.traffic_policy_instance_name_marker(),
        Some("www2.example.com.")
    );
    assert_eq!(
        output.traffic_policy_instance_type_marker(),
        Some(&RrType::Aaaa)
    );
    assert_eq!(output.max_items(), Some(1));
}

#[test]
fn deserialize_error_response_metadata() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <Error>
                <Type>Sender</Type>
                <Code>NoSuchHostedZone</Code>
                <Message>No hosted zone found with ID: Z1PA6795UKMFR9</Message>
            </Error>
            <RequestId>b25f48e8-84fd-11e6-80d9-574e0c4664cb</RequestId>
        </ErrorResponse>"#;

    let meta = route53::xml_deser::deser_error_metadata(body).expect("valid error response");
    assert_eq!(meta.code(), Some("NoSuchHostedZone"));
    assert_eq!(
        meta.message(),
        Some("No hosted zone found with ID: Z1PA6795UKMFR9")
    );
}

#[test]
fn operation_error_built_from_parsed_metadata() {
    let body = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <Error>
                <Type>Sender</Type>
                <Code>NoSuchHostedZone</Code>
                <Message>No hosted zone found with ID: Z1PA6795UKMFR9</Message>
            </Error>
            <RequestId>b25f48e8-84fd-11e6-80d9-574e0c4664cb</RequestId>
        </ErrorResponse>"#;

    let meta = route53::xml_deser::deser_error_metadata(body).expect("valid error response");
    let err = route53::error::ChangeResourceRecordSetsError::new(
        route53::error::ChangeResourceRecordSetsErrorKind::NoSuchHostedZone(
            route53::error::NoSuchHostedZone::builder()
                .message(meta.message().unwrap_or_default())
                .build(),
        ),
        meta,
    );

    assert!(err.is_no_such_hosted_zone());
    assert!(!err.is_invalid_change_batch());
    assert_eq!(err.code(), Some("NoSuchHostedZone"));
    assert_eq!(err.meta().code(), Some("NoSuchHostedZone"));
    assert_eq!(
        err.message(),
        Some("No hosted zone found with ID: Z1PA6795UKMFR9")
    );

    // Display and source both forward to the modeled error.
    assert_eq!(
        format!("{}", err),
        "NoSuchHostedZone: No hosted zone found with ID: Z1PA6795UKMFR9"
    );
    let source = std::error::Error::source(&err).expect("source is the modeled error");
    assert_eq!(
        format!("{}", source),
        "NoSuchHostedZone: No hosted zone found with ID: Z1PA6795UKMFR9"
    );
}

#[test]
fn unhandled_operation_error_has_empty_metadata() {
    let err = route53::error::ChangeResourceRecordSetsError::unhandled("unparseable response");
    assert!(!err.is_no_such_hosted_zone());
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), None);
    assert_eq!(format!("{}", err), "unparseable response");
}
