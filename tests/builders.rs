use route53::model::{
    Change, ChangeAction, GeoLocation, HealthCheckRegion, ResettableElementName, ResourceRecord,
    ResourceRecordSet, RrType,
};

#[test]
fn resource_record_set_builder_preserves_fields() {
    let rrset = ResourceRecordSet::builder()
        .name("www.example.com.")
        .r#type(RrType::A)
        .ttl(300)
        .resource_records(ResourceRecord::builder().value("192.0.2.44").build())
        .build();

    assert_eq!(rrset.name(), Some("www.example.com."));
    assert_eq!(rrset.r#type(), Some(&RrType::A));
    assert_eq!(rrset.ttl(), Some(300));
    let records = rrset.resource_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value(), Some("192.0.2.44"));
    assert_eq!(rrset.set_identifier(), None);
    assert_eq!(rrset.weight(), None);
}

#[test]
fn identical_changes_are_equal() {
    let make = || {
        Change::builder()
            .action(ChangeAction::Upsert)
            .resource_record_set(
                ResourceRecordSet::builder()
                    .name("www.example.com.")
                    .r#type(RrType::A)
                    .ttl(300)
                    .build(),
            )
            .build()
    };
    assert_eq!(make(), make());
}

#[test]
fn mutated_change_is_not_equal() {
    let a = Change::builder().action(ChangeAction::Create).build();
    let mut b = a.clone();
    assert_eq!(a, b);
    b.action = Some(ChangeAction::Delete);
    assert_ne!(a, b);
}

#[test]
fn geo_location_equality_covers_all_fields() {
    let a = GeoLocation::builder()
        .country_code("US")
        .subdivision_code("WA")
        .build();
    let b = GeoLocation::builder()
        .country_code("US")
        .subdivision_code("WA")
        .build();
    let c = GeoLocation::builder().country_code("US").build();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn set_methods_accept_explicit_none() {
    let rrset = ResourceRecordSet::builder()
        .name("www.example.com.")
        .set_name(None)
        .build();
    assert_eq!(rrset.name(), None);
}

#[test]
fn vec_setters_append_one_item_at_a_time() {
    let input = route53::input::UpdateHealthCheckInput::builder()
        .health_check_id("abcdef11-2222-3333-4444-555555fedcba")
        .regions(HealthCheckRegion::UsEast1)
        .regions(HealthCheckRegion::UsWest2)
        .reset_elements(ResettableElementName::FullyQualifiedDomainName)
        .build()
        .expect("valid input");

    assert_eq!(
        input.regions(),
        Some(&[HealthCheckRegion::UsEast1, HealthCheckRegion::UsWest2][..])
    );
    assert_eq!(
        input.reset_elements(),
        Some(&[ResettableElementName::FullyQualifiedDomainName][..])
    );
}

#[test]
fn set_vec_overrides_appended_items() {
    let input = route53::input::UpdateHealthCheckInput::builder()
        .regions(HealthCheckRegion::UsEast1)
        .set_regions(Some(vec![HealthCheckRegion::EuWest1]))
        .build()
        .expect("valid input");
    assert_eq!(input.regions(), Some(&[HealthCheckRegion::EuWest1][..]));
}

#[test]
fn rr_type_string_conversions() {
    assert_eq!(RrType::from("A"), RrType::A);
    assert_eq!("TXT".parse::<RrType>().unwrap(), RrType::Txt);
    assert_eq!(RrType::Aaaa.as_str(), "AAAA");
    assert_eq!(RrType::Cname.as_ref(), "CNAME");
    assert!(RrType::values().contains(&"SOA"));
}

#[test]
fn unrecognized_enum_value_round_trips_through_unknown() {
    let ty = RrType::from("SVCB");
    assert_eq!(ty, RrType::Unknown("SVCB".to_owned()));
    assert_eq!(ty.as_str(), "SVCB");
}

#[test]
fn change_action_wire_values() {
    assert_eq!(ChangeAction::Create.as_str(), "CREATE");
    assert_eq!(ChangeAction::Delete.as_str(), "DELETE");
    assert_eq!(ChangeAction::Upsert.as_str(), "UPSERT");
    assert_eq!(ChangeAction::from("UPSERT"), ChangeAction::Upsert);
}

#[test]
fn create_hosted_zone_input_builder() {
    let input = route53::input::CreateHostedZoneInput::builder()
        .name("example.com")
        .caller_reference("myUniqueIdentifier")
        .vpc(
            route53::model::Vpc::builder()
                .vpc_region(route53::model::VpcRegion::UsEast1)
                .vpc_id("vpc-1a2b3c4d")
                .build(),
        )
        .build()
        .expect("valid input");

    assert_eq!(input.name(), Some("example.com"));
    assert_eq!(input.caller_reference(), Some("myUniqueIdentifier"));
    let vpc = input.vpc().unwrap();
    assert_eq!(vpc.vpc_region(), Some(&route53::model::VpcRegion::UsEast1));
    assert_eq!(vpc.vpc_id(), Some("vpc-1a2b3c4d"));
}

#[test]
fn list_resource_record_sets_input_builder() {
    let input = route53::input::ListResourceRecordSetsInput::builder()
        .hosted_zone_id("Z1PA6795UKMFR9")
        .start_record_name("www.example.com.")
        .start_record_type(RrType::A)
        .start_record_identifier("us-west-2")
        .max_items(100)
        .build()
        .expect("valid input");

    assert_eq!(input.hosted_zone_id(), Some("Z1PA6795UKMFR9"));
    assert_eq!(input.start_record_name(), Some("www.example.com."));
    assert_eq!(input.start_record_type(), Some(&RrType::A));
    assert_eq!(input.start_record_identifier(), Some("us-west-2"));
    assert_eq!(input.max_items(), Some(100));
}

#[test]
fn list_geo_locations_input_defaults_to_unset_markers() {
    let input = route53::input::ListGeoLocationsInput::builder()
        .max_items(1)
        .build()
        .expect("valid input");

    assert_eq!(input.max_items(), Some(1));
    assert_eq!(input.start_continent_code(), None);
    assert_eq!(input.start_country_code(), None);
    assert_eq!(input.start_subdivision_code(), None);
}

#[test]
fn error_display_includes_name_and_message() {
    let err = route53::error::NoSuchHostedZone::builder()
        .message("No hosted zone found with ID: Z1PA6795UKMFR9")
        .build();
    assert_eq!(
        format!("{}", err),
        "NoSuchHostedZone: No hosted zone found with ID: Z1PA6795UKMFR9"
    );
}

#[test]
fn operation_error_kind_predicates() {
    let err = route53::error::UpdateHealthCheckError::new(
        route53::error::UpdateHealthCheckErrorKind::NoSuchHealthCheck(
            route53::error::NoSuchHealthCheck::builder()
                .message("no such health check")
                .build(),
        ),
        route53::ErrorMetadata::builder()
            .code("NoSuchHealthCheck")
            .message("no such health check")
            .build(),
    );
    assert!(err.is_no_such_health_check());
    assert!(!err.is_invalid_input());
    assert_eq!(err.code(), Some("NoSuchHealthCheck"));
    assert_eq!(err.message(), Some("no such health check"));
}
