/// Error type for the `ChangeResourceRecordSets` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ChangeResourceRecordSetsError {
    /// Kind of error that occurred.
    pub kind: ChangeResourceRecordSetsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ChangeResourceRecordSets` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ChangeResourceRecordSetsErrorKind {
    /// <p>This exception contains a list of messages that might contain one or more error messages. Each error message indicates one error in the change batch.</p>
    InvalidChangeBatch(crate::error::InvalidChangeBatch),
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No health check exists with the specified ID.</p>
    NoSuchHealthCheck(crate::error::NoSuchHealthCheck),
    /// <p>No hosted zone exists with the ID that you specified.</p>
    NoSuchHostedZone(crate::error::NoSuchHostedZone),
    /// <p>If Amazon Route 53 can't process a request before the next request arrives, it will reject subsequent requests for the same hosted zone and return an <code>HTTP 400 error</code> (<code>Bad request</code>). If Route 53 returns this error repeatedly for the same request, we recommend that you wait, in intervals of increasing duration, before you try the request again.</p>
    PriorRequestNotComplete(crate::error::PriorRequestNotComplete),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ChangeResourceRecordSetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ChangeResourceRecordSetsErrorKind::InvalidChangeBatch(inner) => write!(f, "{}", inner),
            ChangeResourceRecordSetsErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ChangeResourceRecordSetsErrorKind::NoSuchHealthCheck(inner) => write!(f, "{}", inner),
            ChangeResourceRecordSetsErrorKind::NoSuchHostedZone(inner) => write!(f, "{}", inner),
            ChangeResourceRecordSetsErrorKind::PriorRequestNotComplete(inner) => write!(f, "{}", inner),
            ChangeResourceRecordSetsErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ChangeResourceRecordSetsError {
    /// Creates a new `ChangeResourceRecordSetsError`.
    pub fn new(kind: ChangeResourceRecordSetsErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ChangeResourceRecordSetsError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ChangeResourceRecordSetsErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ChangeResourceRecordSetsErrorKind::InvalidChangeBatch`.
    pub fn is_invalid_change_batch(&self) -> bool {
        matches!(&self.kind, ChangeResourceRecordSetsErrorKind::InvalidChangeBatch(_))
    }

    /// Returns `true` if the error kind is `ChangeResourceRecordSetsErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ChangeResourceRecordSetsErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `ChangeResourceRecordSetsErrorKind::NoSuchHealthCheck`.
    pub fn is_no_such_health_check(&self) -> bool {
        matches!(&self.kind, ChangeResourceRecordSetsErrorKind::NoSuchHealthCheck(_))
    }

    /// Returns `true` if the error kind is `ChangeResourceRecordSetsErrorKind::NoSuchHostedZone`.
    pub fn is_no_such_hosted_zone(&self) -> bool {
        matches!(&self.kind, ChangeResourceRecordSetsErrorKind::NoSuchHostedZone(_))
    }

    /// Returns `true` if the error kind is `ChangeResourceRecordSetsErrorKind::PriorRequestNotComplete`.
    pub fn is_prior_request_not_complete(&self) -> bool {
        matches!(&self.kind, ChangeResourceRecordSetsErrorKind::PriorRequestNotComplete(_))
    }
}
impl std::error::Error for ChangeResourceRecordSetsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ChangeResourceRecordSetsErrorKind::InvalidChangeBatch(inner) => Some(inner),
            ChangeResourceRecordSetsErrorKind::InvalidInput(inner) => Some(inner),
            ChangeResourceRecordSetsErrorKind::NoSuchHealthCheck(inner) => Some(inner),
            ChangeResourceRecordSetsErrorKind::NoSuchHostedZone(inner) => Some(inner),
            ChangeResourceRecordSetsErrorKind::PriorRequestNotComplete(inner) => Some(inner),
            ChangeResourceRecordSetsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateHostedZone` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateHostedZoneError {
    /// Kind of error that occurred.
    pub kind: CreateHostedZoneErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `CreateHostedZone` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateHostedZoneErrorKind {
    /// <p>The cause of this error depends on the operation that you're performing:</p>
    ConflictingDomainExists(crate::error::ConflictingDomainExists),
    /// <p>You can create a hosted zone that has the same name as an existing hosted zone (example.com is common), but there is a limit to the number of hosted zones that have the same name. If you get this error, Amazon Route 53 has reached that limit. If you own the domain name and Route 53 generates this error, contact Customer Support.</p>
    DelegationSetNotAvailable(crate::error::DelegationSetNotAvailable),
    /// <p>A reusable delegation set with the specified ID does not exist.</p>
    DelegationSetNotReusable(crate::error::DelegationSetNotReusable),
    /// <p>The hosted zone you're trying to create already exists. Amazon Route 53 returns this error when a hosted zone has already been created with the specified <code>CallerReference</code>.</p>
    HostedZoneAlreadyExists(crate::error::HostedZoneAlreadyExists),
    /// <p>The specified domain name is not valid.</p>
    InvalidDomainName(crate::error::InvalidDomainName),
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The VPC ID that you specified either isn't a valid ID or the current account is not authorized to access this VPC.</p>
    InvalidVpcId(crate::error::InvalidVpcId),
    /// <p>A reusable delegation set with the specified ID does not exist.</p>
    NoSuchDelegationSet(crate::error::NoSuchDelegationSet),
    /// <p>This operation can't be completed either because the current account has reached the limit on the number of hosted zones or because you've reached the limit on the number of hosted zones that can be associated with a reusable delegation set.</p>
    TooManyHostedZones(crate::error::TooManyHostedZones),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateHostedZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateHostedZoneErrorKind::ConflictingDomainExists(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::DelegationSetNotAvailable(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::DelegationSetNotReusable(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::HostedZoneAlreadyExists(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::InvalidDomainName(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::InvalidVpcId(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::NoSuchDelegationSet(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::TooManyHostedZones(inner) => write!(f, "{}", inner),
            CreateHostedZoneErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl CreateHostedZoneError {
    /// Creates a new `CreateHostedZoneError`.
    pub fn new(kind: CreateHostedZoneErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `CreateHostedZoneError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateHostedZoneErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::ConflictingDomainExists`.
    pub fn is_conflicting_domain_exists(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::ConflictingDomainExists(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::DelegationSetNotAvailable`.
    pub fn is_delegation_set_not_available(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::DelegationSetNotAvailable(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::DelegationSetNotReusable`.
    pub fn is_delegation_set_not_reusable(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::DelegationSetNotReusable(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::HostedZoneAlreadyExists`.
    pub fn is_hosted_zone_already_exists(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::HostedZoneAlreadyExists(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::InvalidDomainName`.
    pub fn is_invalid_domain_name(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::InvalidDomainName(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::InvalidVpcId`.
    pub fn is_invalid_vpc_id(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::InvalidVpcId(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::NoSuchDelegationSet`.
    pub fn is_no_such_delegation_set(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::NoSuchDelegationSet(_))
    }

    /// Returns `true` if the error kind is `CreateHostedZoneErrorKind::TooManyHostedZones`.
    pub fn is_too_many_hosted_zones(&self) -> bool {
        matches!(&self.kind, CreateHostedZoneErrorKind::TooManyHostedZones(_))
    }
}
impl std::error::Error for CreateHostedZoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateHostedZoneErrorKind::ConflictingDomainExists(inner) => Some(inner),
            CreateHostedZoneErrorKind::DelegationSetNotAvailable(inner) => Some(inner),
            CreateHostedZoneErrorKind::DelegationSetNotReusable(inner) => Some(inner),
            CreateHostedZoneErrorKind::HostedZoneAlreadyExists(inner) => Some(inner),
            CreateHostedZoneErrorKind::InvalidDomainName(inner) => Some(inner),
            CreateHostedZoneErrorKind::InvalidInput(inner) => Some(inner),
            CreateHostedZoneErrorKind::InvalidVpcId(inner) => Some(inner),
            CreateHostedZoneErrorKind::NoSuchDelegationSet(inner) => Some(inner),
            CreateHostedZoneErrorKind::TooManyHostedZones(inner) => Some(inner),
            CreateHostedZoneErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListGeoLocations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListGeoLocationsError {
    /// Kind of error that occurred.
    pub kind: ListGeoLocationsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListGeoLocations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListGeoLocationsErrorKind {
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListGeoLocationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListGeoLocationsErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListGeoLocationsErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListGeoLocationsError {
    /// Creates a new `ListGeoLocationsError`.
    pub fn new(kind: ListGeoLocationsErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListGeoLocationsError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListGeoLocationsErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListGeoLocationsErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListGeoLocationsErrorKind::InvalidInput(_))
    }
}
impl std::error::Error for ListGeoLocationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListGeoLocationsErrorKind::InvalidInput(inner) => Some(inner),
            ListGeoLocationsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListHostedZonesByName` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListHostedZonesByNameError {
    /// Kind of error that occurred.
    pub kind: ListHostedZonesByNameErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListHostedZonesByName` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListHostedZonesByNameErrorKind {
    /// <p>The specified domain name is not valid.</p>
    InvalidDomainName(crate::error::InvalidDomainName),
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListHostedZonesByNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListHostedZonesByNameErrorKind::InvalidDomainName(inner) => write!(f, "{}", inner),
            ListHostedZonesByNameErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListHostedZonesByNameErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListHostedZonesByNameError {
    /// Creates a new `ListHostedZonesByNameError`.
    pub fn new(kind: ListHostedZonesByNameErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListHostedZonesByNameError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListHostedZonesByNameErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListHostedZonesByNameErrorKind::InvalidDomainName`.
    pub fn is_invalid_domain_name(&self) -> bool {
        matches!(&self.kind, ListHostedZonesByNameErrorKind::InvalidDomainName(_))
    }

    /// Returns `true` if the error kind is `ListHostedZonesByNameErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListHostedZonesByNameErrorKind::InvalidInput(_))
    }
}
impl std::error::Error for ListHostedZonesByNameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListHostedZonesByNameErrorKind::InvalidDomainName(inner) => Some(inner),
            ListHostedZonesByNameErrorKind::InvalidInput(inner) => Some(inner),
            ListHostedZonesByNameErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListResourceRecordSets` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListResourceRecordSetsError {
    /// Kind of error that occurred.
    pub kind: ListResourceRecordSetsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListResourceRecordSets` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListResourceRecordSetsErrorKind {
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No hosted zone exists with the ID that you specified.</p>
    NoSuchHostedZone(crate::error::NoSuchHostedZone),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListResourceRecordSetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListResourceRecordSetsErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListResourceRecordSetsErrorKind::NoSuchHostedZone(inner) => write!(f, "{}", inner),
            ListResourceRecordSetsErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListResourceRecordSetsError {
    /// Creates a new `ListResourceRecordSetsError`.
    pub fn new(kind: ListResourceRecordSetsErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListResourceRecordSetsError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListResourceRecordSetsErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListResourceRecordSetsErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListResourceRecordSetsErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `ListResourceRecordSetsErrorKind::NoSuchHostedZone`.
    pub fn is_no_such_hosted_zone(&self) -> bool {
        matches!(&self.kind, ListResourceRecordSetsErrorKind::NoSuchHostedZone(_))
    }
}
impl std::error::Error for ListResourceRecordSetsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListResourceRecordSetsErrorKind::InvalidInput(inner) => Some(inner),
            ListResourceRecordSetsErrorKind::NoSuchHostedZone(inner) => Some(inner),
            ListResourceRecordSetsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListTrafficPolicies` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTrafficPoliciesError {
    /// Kind of error that occurred.
    pub kind: ListTrafficPoliciesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListTrafficPolicies` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTrafficPoliciesErrorKind {
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTrafficPoliciesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTrafficPoliciesErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListTrafficPoliciesErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListTrafficPoliciesError {
    /// Creates a new `ListTrafficPoliciesError`.
    pub fn new(kind: ListTrafficPoliciesErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListTrafficPoliciesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTrafficPoliciesErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListTrafficPoliciesErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListTrafficPoliciesErrorKind::InvalidInput(_))
    }
}
impl std::error::Error for ListTrafficPoliciesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTrafficPoliciesErrorKind::InvalidInput(inner) => Some(inner),
            ListTrafficPoliciesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListTrafficPolicyInstances` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTrafficPolicyInstancesError {
    /// Kind of error that occurred.
    pub kind: ListTrafficPolicyInstancesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListTrafficPolicyInstances` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTrafficPolicyInstancesErrorKind {
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No traffic policy instance exists with the specified ID.</p>
    NoSuchTrafficPolicyInstance(crate::error::NoSuchTrafficPolicyInstance),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTrafficPolicyInstancesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTrafficPolicyInstancesErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListTrafficPolicyInstancesErrorKind::NoSuchTrafficPolicyInstance(inner) => write!(f, "{}", inner),
            ListTrafficPolicyInstancesErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListTrafficPolicyInstancesError {
    /// Creates a new `ListTrafficPolicyInstancesError`.
    pub fn new(kind: ListTrafficPolicyInstancesErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListTrafficPolicyInstancesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTrafficPolicyInstancesErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListTrafficPolicyInstancesErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListTrafficPolicyInstancesErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `ListTrafficPolicyInstancesErrorKind::NoSuchTrafficPolicyInstance`.
    pub fn is_no_such_traffic_policy_instance(&self) -> bool {
        matches!(&self.kind, ListTrafficPolicyInstancesErrorKind::NoSuchTrafficPolicyInstance(_))
    }
}
impl std::error::Error for ListTrafficPolicyInstancesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTrafficPolicyInstancesErrorKind::InvalidInput(inner) => Some(inner),
            ListTrafficPolicyInstancesErrorKind::NoSuchTrafficPolicyInstance(inner) => Some(inner),
            ListTrafficPolicyInstancesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListTrafficPolicyInstancesByHostedZone` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTrafficPolicyInstancesByHostedZoneError {
    /// Kind of error that occurred.
    pub kind: ListTrafficPolicyInstancesByHostedZoneErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `ListTrafficPolicyInstancesByHostedZone` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTrafficPolicyInstancesByHostedZoneErrorKind {
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No hosted zone exists with the ID that you specified.</p>
    NoSuchHostedZone(crate::error::NoSuchHostedZone),
    /// <p>No traffic policy instance exists with the specified ID.</p>
    NoSuchTrafficPolicyInstance(crate::error::NoSuchTrafficPolicyInstance),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTrafficPolicyInstancesByHostedZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTrafficPolicyInstancesByHostedZoneErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchHostedZone(inner) => write!(f, "{}", inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchTrafficPolicyInstance(inner) => write!(f, "{}", inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl ListTrafficPolicyInstancesByHostedZoneError {
    /// Creates a new `ListTrafficPolicyInstancesByHostedZoneError`.
    pub fn new(kind: ListTrafficPolicyInstancesByHostedZoneErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `ListTrafficPolicyInstancesByHostedZoneError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTrafficPolicyInstancesByHostedZoneErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `ListTrafficPolicyInstancesByHostedZoneErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, ListTrafficPolicyInstancesByHostedZoneErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchHostedZone`.
    pub fn is_no_such_hosted_zone(&self) -> bool {
        matches!(&self.kind, ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchHostedZone(_))
    }

    /// Returns `true` if the error kind is `ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchTrafficPolicyInstance`.
    pub fn is_no_such_traffic_policy_instance(&self) -> bool {
        matches!(&self.kind, ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchTrafficPolicyInstance(_))
    }
}
impl std::error::Error for ListTrafficPolicyInstancesByHostedZoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTrafficPolicyInstancesByHostedZoneErrorKind::InvalidInput(inner) => Some(inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchHostedZone(inner) => Some(inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::NoSuchTrafficPolicyInstance(inner) => Some(inner),
            ListTrafficPolicyInstancesByHostedZoneErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateHealthCheck` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateHealthCheckError {
    /// Kind of error that occurred.
    pub kind: UpdateHealthCheckErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: aws_smithy_types::error::ErrorMetadata,
}
/// Types of errors that can occur for the `UpdateHealthCheck` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateHealthCheckErrorKind {
    /// <p>The value of <code>HealthCheckVersion</code> in the request doesn't match the value of <code>HealthCheckVersion</code> in the health check.</p>
    HealthCheckVersionMismatch(crate::error::HealthCheckVersionMismatch),
    /// <p>The input is not valid.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No health check exists with the specified ID.</p>
    NoSuchHealthCheck(crate::error::NoSuchHealthCheck),
    /// An unexpected error occurred, such as an invalid response from the service or an unknown error code.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateHealthCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateHealthCheckErrorKind::HealthCheckVersionMismatch(inner) => write!(f, "{}", inner),
            UpdateHealthCheckErrorKind::InvalidInput(inner) => write!(f, "{}", inner),
            UpdateHealthCheckErrorKind::NoSuchHealthCheck(inner) => write!(f, "{}", inner),
            UpdateHealthCheckErrorKind::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}
impl UpdateHealthCheckError {
    /// Creates a new `UpdateHealthCheckError`.
    pub fn new(kind: UpdateHealthCheckErrorKind, meta: aws_smithy_types::error::ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Creates the `UpdateHealthCheckError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateHealthCheckErrorKind::Unhandled(err.into()),
            meta: aws_smithy_types::error::ErrorMetadata::builder().build(),
        }
    }

    /// Returns error metadata, which includes the error code, message, and request ID.
    pub fn meta(&self) -> &aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }

    /// Returns the error code if it's available.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message if it's available.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns `true` if the error kind is `UpdateHealthCheckErrorKind::HealthCheckVersionMismatch`.
    pub fn is_health_check_version_mismatch(&self) -> bool {
        matches!(&self.kind, UpdateHealthCheckErrorKind::HealthCheckVersionMismatch(_))
    }

    /// Returns `true` if the error kind is `UpdateHealthCheckErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, UpdateHealthCheckErrorKind::InvalidInput(_))
    }

    /// Returns `true` if the error kind is `UpdateHealthCheckErrorKind::NoSuchHealthCheck`.
    pub fn is_no_such_health_check(&self) -> bool {
        matches!(&self.kind, UpdateHealthCheckErrorKind::NoSuchHealthCheck(_))
    }
}
impl std::error::Error for UpdateHealthCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateHealthCheckErrorKind::HealthCheckVersionMismatch(inner) => Some(inner),
            UpdateHealthCheckErrorKind::InvalidInput(inner) => Some(inner),
            UpdateHealthCheckErrorKind::NoSuchHealthCheck(inner) => Some(inner),
            UpdateHealthCheckErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// <p>The cause of this error depends on the operation that you're performing:</p>
/// <ul>
/// <li> <p> <b>Create a public hosted zone:</b> Two hosted zones that have the same name or that have a parent/child relationship (example.com and test.example.com) can't have any common name servers. You tried to create a hosted zone that has the same name as an existing hosted zone or that's the parent or child of an existing hosted zone, and you specified a delegation set that shares one or more name servers with the existing hosted zone.</p> </li>
/// <li> <p> <b>Create a private hosted zone:</b> A hosted zone with the specified name already exists and is already associated with the Amazon VPC that you specified.</p> </li>
/// </ul>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ConflictingDomainExists {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl ConflictingDomainExists {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ConflictingDomainExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConflictingDomainExists")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ConflictingDomainExists {}
/// See [`ConflictingDomainExists`](crate::error::ConflictingDomainExists).
pub mod conflicting_domain_exists {

    /// A builder for [`ConflictingDomainExists`](crate::error::ConflictingDomainExists).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ConflictingDomainExists`](crate::error::ConflictingDomainExists).
        pub fn build(self) -> crate::error::ConflictingDomainExists {
            crate::error::ConflictingDomainExists {
                message: self.message,
            }
        }
    }
}
impl ConflictingDomainExists {
    /// Creates a new builder-style object to manufacture [`ConflictingDomainExists`](crate::error::ConflictingDomainExists).
    pub fn builder() -> crate::error::conflicting_domain_exists::Builder {
        crate::error::conflicting_domain_exists::Builder::default()
    }
}

/// <p>You can create a hosted zone that has the same name as an existing hosted zone (example.com is common), but there is a limit to the number of hosted zones that have the same name. If you get this error, Amazon Route 53 has reached that limit. If you own the domain name and Route 53 generates this error, contact Customer Support.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DelegationSetNotAvailable {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DelegationSetNotAvailable {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DelegationSetNotAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegationSetNotAvailable")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DelegationSetNotAvailable {}
/// See [`DelegationSetNotAvailable`](crate::error::DelegationSetNotAvailable).
pub mod delegation_set_not_available {

    /// A builder for [`DelegationSetNotAvailable`](crate::error::DelegationSetNotAvailable).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DelegationSetNotAvailable`](crate::error::DelegationSetNotAvailable).
        pub fn build(self) -> crate::error::DelegationSetNotAvailable {
            crate::error::DelegationSetNotAvailable {
                message: self.message,
            }
        }
    }
}
impl DelegationSetNotAvailable {
    /// Creates a new builder-style object to manufacture [`DelegationSetNotAvailable`](crate::error::DelegationSetNotAvailable).
    pub fn builder() -> crate::error::delegation_set_not_available::Builder {
        crate::error::delegation_set_not_available::Builder::default()
    }
}

/// <p>A reusable delegation set with the specified ID does not exist.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DelegationSetNotReusable {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DelegationSetNotReusable {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DelegationSetNotReusable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegationSetNotReusable")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DelegationSetNotReusable {}
/// See [`DelegationSetNotReusable`](crate::error::DelegationSetNotReusable).
pub mod delegation_set_not_reusable {

    /// A builder for [`DelegationSetNotReusable`](crate::error::DelegationSetNotReusable).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DelegationSetNotReusable`](crate::error::DelegationSetNotReusable).
        pub fn build(self) -> crate::error::DelegationSetNotReusable {
            crate::error::DelegationSetNotReusable {
                message: self.message,
            }
        }
    }
}
impl DelegationSetNotReusable {
    /// Creates a new builder-style object to manufacture [`DelegationSetNotReusable`](crate::error::DelegationSetNotReusable).
    pub fn builder() -> crate::error::delegation_set_not_reusable::Builder {
        crate::error::delegation_set_not_reusable::Builder::default()
    }
}

/// <p>The value of <code>HealthCheckVersion</code> in the request doesn't match the value of <code>HealthCheckVersion</code> in the health check.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct HealthCheckVersionMismatch {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl HealthCheckVersionMismatch {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for HealthCheckVersionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HealthCheckVersionMismatch")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for HealthCheckVersionMismatch {}
/// See [`HealthCheckVersionMismatch`](crate::error::HealthCheckVersionMismatch).
pub mod health_check_version_mismatch {

    /// A builder for [`HealthCheckVersionMismatch`](crate::error::HealthCheckVersionMismatch).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`HealthCheckVersionMismatch`](crate::error::HealthCheckVersionMismatch).
        pub fn build(self) -> crate::error::HealthCheckVersionMismatch {
            crate::error::HealthCheckVersionMismatch {
                message: self.message,
            }
        }
    }
}
impl HealthCheckVersionMismatch {
    /// Creates a new builder-style object to manufacture [`HealthCheckVersionMismatch`](crate::error::HealthCheckVersionMismatch).
    pub fn builder() -> crate::error::health_check_version_mismatch::Builder {
        crate::error::health_check_version_mismatch::Builder::default()
    }
}

/// <p>The hosted zone you're trying to create already exists. Amazon Route 53 returns this error when a hosted zone has already been created with the specified <code>CallerReference</code>.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct HostedZoneAlreadyExists {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl HostedZoneAlreadyExists {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for HostedZoneAlreadyExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HostedZoneAlreadyExists")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for HostedZoneAlreadyExists {}
/// See [`HostedZoneAlreadyExists`](crate::error::HostedZoneAlreadyExists).
pub mod hosted_zone_already_exists {

    /// A builder for [`HostedZoneAlreadyExists`](crate::error::HostedZoneAlreadyExists).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`HostedZoneAlreadyExists`](crate::error::HostedZoneAlreadyExists).
        pub fn build(self) -> crate::error::HostedZoneAlreadyExists {
            crate::error::HostedZoneAlreadyExists {
                message: self.message,
            }
        }
    }
}
impl HostedZoneAlreadyExists {
    /// Creates a new builder-style object to manufacture [`HostedZoneAlreadyExists`](crate::error::HostedZoneAlreadyExists).
    pub fn builder() -> crate::error::hosted_zone_already_exists::Builder {
        crate::error::hosted_zone_already_exists::Builder::default()
    }
}

/// <p>This exception contains a list of messages that might contain one or more error messages. Each error message indicates one error in the change batch.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidChangeBatch {
    /// <p>Descriptive message for the error response.</p>
    pub messages: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidChangeBatch {
    /// <p>Descriptive message for the error response.</p>
    pub fn messages(&self) -> std::option::Option<&[std::string::String]> {
        self.messages.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidChangeBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidChangeBatch")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidChangeBatch {}
/// See [`InvalidChangeBatch`](crate::error::InvalidChangeBatch).
pub mod invalid_change_batch {

    /// A builder for [`InvalidChangeBatch`](crate::error::InvalidChangeBatch).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) messages: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `messages`.
        ///
        /// To override the contents of this collection use [`set_messages`](Self::set_messages).
        pub fn messages(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.messages.unwrap_or_default();
            v.push(input.into());
            self.messages = Some(v);
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_messages(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.messages = input;
            self
        }
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidChangeBatch`](crate::error::InvalidChangeBatch).
        pub fn build(self) -> crate::error::InvalidChangeBatch {
            crate::error::InvalidChangeBatch {
                messages: self.messages,
                message: self.message,
            }
        }
    }
}
impl InvalidChangeBatch {
    /// Creates a new builder-style object to manufacture [`InvalidChangeBatch`](crate::error::InvalidChangeBatch).
    pub fn builder() -> crate::error::invalid_change_batch::Builder {
        crate::error::invalid_change_batch::Builder::default()
    }
}

/// <p>The specified domain name is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidDomainName {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidDomainName {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidDomainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidDomainName")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidDomainName {}
/// See [`InvalidDomainName`](crate::error::InvalidDomainName).
pub mod invalid_domain_name {

    /// A builder for [`InvalidDomainName`](crate::error::InvalidDomainName).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidDomainName`](crate::error::InvalidDomainName).
        pub fn build(self) -> crate::error::InvalidDomainName {
            crate::error::InvalidDomainName {
                message: self.message,
            }
        }
    }
}
impl InvalidDomainName {
    /// Creates a new builder-style object to manufacture [`InvalidDomainName`](crate::error::InvalidDomainName).
    pub fn builder() -> crate::error::invalid_domain_name::Builder {
        crate::error::invalid_domain_name::Builder::default()
    }
}

/// <p>The input is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidInput {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidInput {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidInput")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidInput {}
/// See [`InvalidInput`](crate::error::InvalidInput).
pub mod invalid_input {

    /// A builder for [`InvalidInput`](crate::error::InvalidInput).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidInput`](crate::error::InvalidInput).
        pub fn build(self) -> crate::error::InvalidInput {
            crate::error::InvalidInput {
                message: self.message,
            }
        }
    }
}
impl InvalidInput {
    /// Creates a new builder-style object to manufacture [`InvalidInput`](crate::error::InvalidInput).
    pub fn builder() -> crate::error::invalid_input::Builder {
        crate::error::invalid_input::Builder::default()
    }
}

/// <p>The VPC ID that you specified either isn't a valid ID or the current account is not authorized to access this VPC.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidVpcId {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidVpcId {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidVpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidVpcId")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidVpcId {}
/// See [`InvalidVpcId`](crate::error::InvalidVpcId).
pub mod invalid_vpc_id {

    /// A builder for [`InvalidVpcId`](crate::error::InvalidVpcId).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidVpcId`](crate::error::InvalidVpcId).
        pub fn build(self) -> crate::error::InvalidVpcId {
            crate::error::InvalidVpcId {
                message: self.message,
            }
        }
    }
}
impl InvalidVpcId {
    /// Creates a new builder-style object to manufacture [`InvalidVpcId`](crate::error::InvalidVpcId).
    pub fn builder() -> crate::error::invalid_vpc_id::Builder {
        crate::error::invalid_vpc_id::Builder::default()
    }
}

/// <p>A reusable delegation set with the specified ID does not exist.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct NoSuchDelegationSet {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl NoSuchDelegationSet {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for NoSuchDelegationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoSuchDelegationSet")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NoSuchDelegationSet {}
/// See [`NoSuchDelegationSet`](crate::error::NoSuchDelegationSet).
pub mod no_such_delegation_set {

    /// A builder for [`NoSuchDelegationSet`](crate::error::NoSuchDelegationSet).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`NoSuchDelegationSet`](crate::error::NoSuchDelegationSet).
        pub fn build(self) -> crate::error::NoSuchDelegationSet {
            crate::error::NoSuchDelegationSet {
                message: self.message,
            }
        }
    }
}
impl NoSuchDelegationSet {
    /// Creates a new builder-style object to manufacture [`NoSuchDelegationSet`](crate::error::NoSuchDelegationSet).
    pub fn builder() -> crate::error::no_such_delegation_set::Builder {
        crate::error::no_such_delegation_set::Builder::default()
    }
}

/// <p>No health check exists with the specified ID.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct NoSuchHealthCheck {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl NoSuchHealthCheck {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for NoSuchHealthCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoSuchHealthCheck")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NoSuchHealthCheck {}
/// See [`NoSuchHealthCheck`](crate::error::NoSuchHealthCheck).
pub mod no_such_health_check {

    /// A builder for [`NoSuchHealthCheck`](crate::error::NoSuchHealthCheck).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`NoSuchHealthCheck`](crate::error::NoSuchHealthCheck).
        pub fn build(self) -> crate::error::NoSuchHealthCheck {
            crate::error::NoSuchHealthCheck {
                message: self.message,
            }
        }
    }
}
impl NoSuchHealthCheck {
    /// Creates a new builder-style object to manufacture [`NoSuchHealthCheck`](crate::error::NoSuchHealthCheck).
    pub fn builder() -> crate::error::no_such_health_check::Builder {
        crate::error::no_such_health_check::Builder::default()
    }
}

/// <p>No hosted zone exists with the ID that you specified.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct NoSuchHostedZone {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl NoSuchHostedZone {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for NoSuchHostedZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoSuchHostedZone")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NoSuchHostedZone {}
/// See [`NoSuchHostedZone`](crate::error::NoSuchHostedZone).
pub mod no_such_hosted_zone {

    /// A builder for [`NoSuchHostedZone`](crate::error::NoSuchHostedZone).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`NoSuchHostedZone`](crate::error::NoSuchHostedZone).
        pub fn build(self) -> crate::error::NoSuchHostedZone {
            crate::error::NoSuchHostedZone {
                message: self.message,
            }
        }
    }
}
impl NoSuchHostedZone {
    /// Creates a new builder-style object to manufacture [`NoSuchHostedZone`](crate::error::NoSuchHostedZone).
    pub fn builder() -> crate::error::no_such_hosted_zone::Builder {
        crate::error::no_such_hosted_zone::Builder::default()
    }
}

/// <p>No traffic policy instance exists with the specified ID.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct NoSuchTrafficPolicyInstance {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl NoSuchTrafficPolicyInstance {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for NoSuchTrafficPolicyInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoSuchTrafficPolicyInstance")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NoSuchTrafficPolicyInstance {}
/// See [`NoSuchTrafficPolicyInstance`](crate::error::NoSuchTrafficPolicyInstance).
pub mod no_such_traffic_policy_instance {

    /// A builder for [`NoSuchTrafficPolicyInstance`](crate::error::NoSuchTrafficPolicyInstance).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`NoSuchTrafficPolicyInstance`](crate::error::NoSuchTrafficPolicyInstance).
        pub fn build(self) -> crate::error::NoSuchTrafficPolicyInstance {
            crate::error::NoSuchTrafficPolicyInstance {
                message: self.message,
            }
        }
    }
}
impl NoSuchTrafficPolicyInstance {
    /// Creates a new builder-style object to manufacture [`NoSuchTrafficPolicyInstance`](crate::error::NoSuchTrafficPolicyInstance).
    pub fn builder() -> crate::error::no_such_traffic_policy_instance::Builder {
        crate::error::no_such_traffic_policy_instance::Builder::default()
    }
}

/// <p>If Amazon Route 53 can't process a request before the next request arrives, it will reject subsequent requests for the same hosted zone and return an <code>HTTP 400 error</code> (<code>Bad request</code>). If Route 53 returns this error repeatedly for the same request, we recommend that you wait, in intervals of increasing duration, before you try the request again.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PriorRequestNotComplete {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl PriorRequestNotComplete {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for PriorRequestNotComplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PriorRequestNotComplete")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for PriorRequestNotComplete {}
/// See [`PriorRequestNotComplete`](crate::error::PriorRequestNotComplete).
pub mod prior_request_not_complete {

    /// A builder for [`PriorRequestNotComplete`](crate::error::PriorRequestNotComplete).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`PriorRequestNotComplete`](crate::error::PriorRequestNotComplete).
        pub fn build(self) -> crate::error::PriorRequestNotComplete {
            crate::error::PriorRequestNotComplete {
                message: self.message,
            }
        }
    }
}
impl PriorRequestNotComplete {
    /// Creates a new builder-style object to manufacture [`PriorRequestNotComplete`](crate::error::PriorRequestNotComplete).
    pub fn builder() -> crate::error::prior_request_not_complete::Builder {
        crate::error::prior_request_not_complete::Builder::default()
    }
}

/// <p>This operation can't be completed either because the current account has reached the limit on the number of hosted zones or because you've reached the limit on the number of hosted zones that can be associated with a reusable delegation set.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct TooManyHostedZones {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl TooManyHostedZones {
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for TooManyHostedZones {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyHostedZones")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyHostedZones {}
/// See [`TooManyHostedZones`](crate::error::TooManyHostedZones).
pub mod too_many_hosted_zones {

    /// A builder for [`TooManyHostedZones`](crate::error::TooManyHostedZones).
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        #[allow(missing_docs)] // documentation missing in model
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`TooManyHostedZones`](crate::error::TooManyHostedZones).
        pub fn build(self) -> crate::error::TooManyHostedZones {
            crate::error::TooManyHostedZones {
                message: self.message,
            }
        }
    }
}
impl TooManyHostedZones {
    /// Creates a new builder-style object to manufacture [`TooManyHostedZones`](crate::error::TooManyHostedZones).
    pub fn builder() -> crate::error::too_many_hosted_zones::Builder {
        crate::error::too_many_hosted_zones::Builder::default()
    }
}
