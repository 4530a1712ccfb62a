//! Client-side validation engine
//!
//! Pure syntactic validators that reject malformed input before a request is built.
//! Every validator returns a [`ValidationResult`] and never panics; [`assert_valid`]
//! is the only bridge from a rejected result to a [`PorkbunError::ValidationError`].

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{PorkbunError, Result};
use crate::types::DnsRecordType;

/// Porkbun 允许的最小 TTL（秒）
pub const MIN_TTL: u32 = 600;
/// MX/SRV priority 上限
pub const MAX_PRIORITY: u32 = 65_535;

// ============ Patterns ============

const LABEL: &str = "[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?";

#[allow(clippy::expect_used)]
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{LABEL}(\.{LABEL})*\.[a-zA-Z]{{2,}}$")).expect("valid domain regex")
});

/// Shared by subdomains and hostnames: dotted labels without a TLD requirement.
#[allow(clippy::expect_used)]
static LABELS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{LABEL}(\.{LABEL})*$")).expect("valid label regex"));

#[allow(clippy::expect_used)]
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
        .expect("valid IPv4 regex")
});

#[allow(clippy::expect_used)]
static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    const H: &str = "[0-9a-fA-F]{1,4}";
    const V4: &str = r"((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])";
    let forms = [
        format!("({H}:){{7}}{H}"),
        format!("({H}:){{1,7}}:"),
        format!("({H}:){{1,6}}:{H}"),
        format!("({H}:){{1,5}}(:{H}){{1,2}}"),
        format!("({H}:){{1,4}}(:{H}){{1,3}}"),
        format!("({H}:){{1,3}}(:{H}){{1,4}}"),
        format!("({H}:){{1,2}}(:{H}){{1,5}}"),
        format!("{H}:((:{H}){{1,6}})"),
        format!(":((:{H}){{1,7}}|:)"),
        "fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+".to_string(),
        format!("::(ffff(:0{{1,4}})?:)?{V4}"),
        format!("({H}:){{1,4}}:{V4}"),
    ];
    Regex::new(&format!("^({})$", forms.join("|"))).expect("valid IPv6 regex")
});

#[allow(clippy::expect_used)]
static SRV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+[0-9]+\s+[0-9]+\s+\S+$").expect("valid SRV regex"));

#[allow(clippy::expect_used)]
static CAA_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[0-9]+\s+\S+\s+".+"$"#).expect("valid CAA regex"));

#[allow(clippy::expect_used)]
static CAA_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+\S+\s+\S+$").expect("valid CAA regex"));

// ============ ValidationResult ============

/// Outcome of a single validator: a field is either accepted or rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value satisfies the rule.
    Valid,
    /// The value violates the rule.
    Invalid {
        /// Human-readable rejection reason.
        reason: String,
    },
}

impl ValidationResult {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// Whether the value was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

/// Converts a rejected [`ValidationResult`] into a [`PorkbunError::ValidationError`].
///
/// No-op for [`ValidationResult::Valid`].
pub fn assert_valid(
    result: ValidationResult,
    field: &str,
    value: impl Into<serde_json::Value>,
) -> Result<()> {
    match result {
        ValidationResult::Valid => Ok(()),
        ValidationResult::Invalid { reason } => Err(PorkbunError::ValidationError {
            field: field.to_string(),
            value: value.into(),
            reason,
        }),
    }
}

// ============ Names ============

/// Validates a registrable domain name such as `example.com` or `sub.example.co.uk`.
pub fn validate_domain(domain: &str) -> ValidationResult {
    if domain.is_empty() {
        return ValidationResult::invalid("Domain cannot be empty");
    }
    if !DOMAIN_RE.is_match(domain) {
        return ValidationResult::invalid("Invalid domain format");
    }
    ValidationResult::Valid
}

/// Validates a subdomain. `""` (root) and `"*"` (wildcard) are always valid.
pub fn validate_subdomain(subdomain: &str) -> ValidationResult {
    if subdomain.is_empty() || subdomain == "*" {
        return ValidationResult::Valid;
    }
    if !LABELS_RE.is_match(subdomain) {
        return ValidationResult::invalid("Invalid subdomain format");
    }
    ValidationResult::Valid
}

/// Validates a hostname (nameservers, MX/CNAME targets). A single trailing dot is allowed.
pub fn validate_hostname(hostname: &str) -> ValidationResult {
    if hostname.is_empty() {
        return ValidationResult::invalid("Hostname cannot be empty");
    }
    let normalized = hostname.strip_suffix('.').unwrap_or(hostname);
    if !LABELS_RE.is_match(normalized) {
        return ValidationResult::invalid("Invalid hostname format");
    }
    ValidationResult::Valid
}

// ============ Numbers & identifiers ============

/// Validates a TTL in seconds: an integer of at least [`MIN_TTL`].
pub fn validate_ttl(ttl: f64) -> ValidationResult {
    if !ttl.is_finite() || ttl.fract() != 0.0 {
        return ValidationResult::invalid("TTL must be an integer");
    }
    if ttl < f64::from(MIN_TTL) {
        return ValidationResult::invalid(format!("TTL must be at least {MIN_TTL} seconds"));
    }
    ValidationResult::Valid
}

/// Validates an MX/SRV priority given as a numeric string.
pub fn validate_priority(prio: &str) -> ValidationResult {
    let Ok(num) = prio.trim().parse::<i64>() else {
        return ValidationResult::invalid("Priority must be a numeric string");
    };
    if !(0..=i64::from(MAX_PRIORITY)).contains(&num) {
        return ValidationResult::invalid(format!(
            "Priority must be an integer between 0 and {MAX_PRIORITY}"
        ));
    }
    ValidationResult::Valid
}

/// Validates a DNS record ID.
pub fn validate_record_id(record_id: &str) -> ValidationResult {
    if record_id.trim().is_empty() {
        return ValidationResult::invalid("Record ID cannot be empty");
    }
    ValidationResult::Valid
}

/// Validates a URL forward ID.
pub fn validate_forward_id(forward_id: &str) -> ValidationResult {
    if forward_id.trim().is_empty() {
        return ValidationResult::invalid("Forward ID cannot be empty");
    }
    ValidationResult::Valid
}

// ============ Addresses ============

/// Validates a dotted-quad IPv4 address.
pub fn validate_ipv4(ip: &str) -> ValidationResult {
    let Some(caps) = IPV4_RE.captures(ip) else {
        return ValidationResult::invalid("Invalid IPv4 format");
    };
    let in_range = caps
        .iter()
        .skip(1)
        .flatten()
        .all(|octet| octet.as_str().parse::<u16>().is_ok_and(|o| o <= 255));
    if !in_range {
        return ValidationResult::invalid("IPv4 octets must be between 0 and 255");
    }
    ValidationResult::Valid
}

/// Validates an IPv6 address in full, compressed, or mixed (IPv4 tail) notation.
pub fn validate_ipv6(ip: &str) -> ValidationResult {
    if !IPV6_RE.is_match(ip) {
        return ValidationResult::invalid("Invalid IPv6 format");
    }
    ValidationResult::Valid
}

/// Validates an IPv4 or IPv6 address.
pub fn validate_ip(ip: &str) -> ValidationResult {
    if validate_ipv4(ip).is_valid() || validate_ipv6(ip).is_valid() {
        return ValidationResult::Valid;
    }
    ValidationResult::invalid("Invalid IP address format (must be valid IPv4 or IPv6)")
}

/// Validates a URL forward target: absolute, with an `http` or `https` scheme.
pub fn validate_url(url: &str) -> ValidationResult {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => ValidationResult::Valid,
        Ok(_) => ValidationResult::invalid("URL must use http or https protocol"),
        Err(_) => ValidationResult::invalid("Invalid URL format"),
    }
}

// ============ Enumerated strings ============

/// Validates a URL forward type.
pub fn validate_forward_type(forward_type: &str) -> ValidationResult {
    if !matches!(forward_type, "temporary" | "permanent") {
        return ValidationResult::invalid("Forward type must be 'temporary' or 'permanent'");
    }
    ValidationResult::Valid
}

/// Validates a `yes`/`no` flag.
pub fn validate_yes_no(value: &str) -> ValidationResult {
    if !matches!(value, "yes" | "no") {
        return ValidationResult::invalid("Value must be 'yes' or 'no'");
    }
    ValidationResult::Valid
}

// ============ Record content ============

/// Validates DNS record content against the syntax of its record type.
pub fn validate_dns_content(record_type: DnsRecordType, content: &str) -> ValidationResult {
    if content.is_empty() {
        return ValidationResult::invalid("Content cannot be empty");
    }

    match record_type {
        DnsRecordType::A => validate_ipv4(content),
        DnsRecordType::Aaaa => validate_ipv6(content),
        DnsRecordType::Mx | DnsRecordType::Cname | DnsRecordType::Ns | DnsRecordType::Alias => {
            validate_hostname(content)
        }
        DnsRecordType::Srv => {
            if SRV_RE.is_match(content) {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid(
                    "SRV record must be in format: priority weight port target",
                )
            }
        }
        DnsRecordType::Caa => {
            if CAA_QUOTED_RE.is_match(content) || CAA_BARE_RE.is_match(content) {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid("CAA record must be in format: flag tag value")
            }
        }
        // TXT 内容几乎不受限制；TLSA/HTTPS/SVCB/SSHFP 交给服务端校验
        DnsRecordType::Txt
        | DnsRecordType::Tlsa
        | DnsRecordType::Https
        | DnsRecordType::Svcb
        | DnsRecordType::Sshfp => ValidationResult::Valid,
    }
}

// ============ Lists ============

/// Validates a non-empty list of nameserver hostnames.
pub fn validate_nameservers<S: AsRef<str>>(ns: &[S]) -> ValidationResult {
    validate_each(ns, "Nameservers", "Nameserver", validate_hostname)
}

/// Validates a non-empty list of IP addresses (glue records).
pub fn validate_ips<S: AsRef<str>>(ips: &[S]) -> ValidationResult {
    validate_each(ips, "IPs", "IP", validate_ip)
}

fn validate_each<S: AsRef<str>>(
    items: &[S],
    list_name: &str,
    item_name: &str,
    validate: fn(&str) -> ValidationResult,
) -> ValidationResult {
    if items.is_empty() {
        return ValidationResult::invalid(format!("{list_name} array cannot be empty"));
    }
    for (i, item) in items.iter().enumerate() {
        if let ValidationResult::Invalid { reason } = validate(item.as_ref()) {
            return ValidationResult::invalid(format!("{item_name} at index {i}: {reason}"));
        }
    }
    ValidationResult::Valid
}
