use aws_smithy_protocol_test::{assert_ok, validate_body, MediaType};
use route53::model::{
    Change, ChangeAction, ChangeBatch, HealthCheckRegion, HostedZoneConfig, ResettableElementName,
    ResourceRecord, ResourceRecordSet, RrType, Vpc, VpcRegion,
};

#[test]
fn serialize_change_resource_record_sets_request() {
    let input = route53::input::ChangeResourceRecordSetsInput::builder()
        .hosted_zone_id("Z1PA6795UKMFR9")
        .change_batch(
            ChangeBatch::builder()
                .comment("Web server for example.com")
                .changes(
                    Change::builder()
                        .action(ChangeAction::Upsert)
                        .resource_record_set(
                            ResourceRecordSet::builder()
                                .name("www.example.com.")
                                .r#type(RrType::A)
                                .ttl(300)
                                .resource_records(
                                    ResourceRecord::builder().value("192.0.2.44").build(),
                                )
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build()
        .expect("valid input");

    let body = route53::xml_ser::serialize_operation_change_resource_record_sets(&input)
        .expect("serialization succeeds");

    assert_ok(validate_body(
        body,
        r#"<ChangeResourceRecordSetsRequest xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <ChangeBatch>
                <Comment>Web server for example.com</Comment>
                <Changes>
                    <Change>
                        <Action>UPSERT</Action>
                        <ResourceRecordSet>
                            <Name>www.example.com.</Name>
                            <Type>A</Type>
                            <TTL>300</TTL>
                            <ResourceRecords>
                                <ResourceRecord>
                                    <Value>192.0.2.44</Value>
                                </ResourceRecord>
                            </ResourceRecords>
                        </ResourceRecordSet>
                    </Change>
                </Changes>
            </ChangeBatch>
        </ChangeResourceRecordSetsRequest>"#,
        MediaType::Xml,
    ));
}

#[test]
fn hosted_zone_id_is_bound_to_the_uri_not_the_body() {
    let input = route53::input::ChangeResourceRecordSetsInput::builder()
        .hosted_zone_id("Z1PA6795UKMFR9")
        .change_batch(ChangeBatch::builder().build())
        .build()
        .expect("valid input");

    let body = route53::xml_ser::serialize_operation_change_resource_record_sets(&input)
        .expect("serialization succeeds");
    assert!(!body.contains("Z1PA6795UKMFR9"));
}

#[test]
fn serialize_create_hosted_zone_request() {
    let input = route53::input::CreateHostedZoneInput::builder()
        .name("example.com")
        .vpc(
            Vpc::builder()
                .vpc_region(VpcRegion::UsEast1)
                .vpc_id("vpc-1a2b3c4d")
                .build(),
        )
        .caller_reference("myUniqueIdentifier")
        .hosted_zone_config(
            HostedZoneConfig::builder()
                .comment("Private zone for example.com")
                .private_zone(true)
                .build(),
        )
        .build()
        .expect("valid input");

    let body = route53::xml_ser::serialize_operation_create_hosted_zone(&input)
        .expect("serialization succeeds");

    assert_ok(validate_body(
        body,
        r#"<CreateHostedZoneRequest xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <Name>example.com</Name>
            <VPC>
                <VPCRegion>us-east-1</VPCRegion>
                <VPCId>vpc-1a2b3c4d</VPCId>
            </VPC>
            <CallerReference>myUniqueIdentifier</CallerReference>
            <HostedZoneConfig>
                <Comment>Private zone for example.com</Comment>
                <PrivateZone>true</PrivateZone>
            </HostedZoneConfig>
        </CreateHostedZoneRequest>"#,
        MediaType::Xml,
    ));
}

#[test]
fn serialize_update_health_check_request() {
    let input = route53::input::UpdateHealthCheckInput::builder()
        .health_check_id("abcdef11-2222-3333-4444-555555fedcba")
        .health_check_version(2)
        .port(443)
        .failure_threshold(3)
        .enable_sni(true)
        .regions(HealthCheckRegion::UsEast1)
        .regions(HealthCheckRegion::UsWest2)
        .reset_elements(ResettableElementName::FullyQualifiedDomainName)
        .build()
        .expect("valid input");

    let body = route53::xml_ser::serialize_operation_update_health_check(&input)
        .expect("serialization succeeds");

    assert_ok(validate_body(
        body,
        r#"<UpdateHealthCheckRequest xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
            <HealthCheckVersion>2</HealthCheckVersion>
            <Port>443</Port>
            <FailureThreshold>3</FailureThreshold>
            <EnableSNI>true</EnableSNI>
            <Regions>
                <Region>us-east-1</Region>
                <Region>us-west-2</Region>
            </Regions>
            <ResetElements>
                <ResettableElementName>FullyQualifiedDomainName</ResettableElementName>
            </ResetElements>
        </UpdateHealthCheckRequest>"#,
        MediaType::Xml,
    ));
}

#[test]
fn unset_members_are_omitted_from_the_body() {
    let input = route53::input::UpdateHealthCheckInput::builder()
        .health_check_id("abcdef11-2222-3333-4444-555555fedcba")
        .build()
        .expect("valid input");

    let body = route53::xml_ser::serialize_operation_update_health_check(&input)
        .expect("serialization succeeds");

    assert_ok(validate_body(
        body,
        r#"<UpdateHealthCheckRequest xmlns="https://route53.amazonaws.com/doc/2013-04-01/"></UpdateHealthCheckRequest>"#,
        MediaType::Xml,
    ));
}
