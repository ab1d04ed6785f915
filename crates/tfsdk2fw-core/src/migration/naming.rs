//! Go identifier naming for model struct fields

use heck::ToUpperCamelCase;

/// Words written fully upper-case in Go identifiers
const INITIALISMS: &[&str] = &[
    "acl", "api", "arn", "cidr", "dns", "http", "https", "iam", "id", "ip", "json", "kms", "sql",
    "ssl", "tls", "ttl", "uri", "url", "vpc",
];

/// `queue_url` -> `QueueURL`
pub fn go_field_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            if INITIALISMS.contains(&word.to_ascii_lowercase().as_str()) {
                word.to_ascii_uppercase()
            } else {
                word.to_upper_camel_case()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_field_names() {
        assert_eq!(go_field_name("name"), "Name");
        assert_eq!(go_field_name("id"), "ID");
        assert_eq!(go_field_name("queue_url"), "QueueURL");
        assert_eq!(go_field_name("kms_master_key_id"), "KMSMasterKeyID");
        assert_eq!(go_field_name("tags_all"), "TagsAll");
        assert_eq!(go_field_name("fifo_queue"), "FifoQueue");
    }

    #[test]
    fn test_initialism_in_middle_and_stray_underscores() {
        assert_eq!(go_field_name("subnet_cidr_block"), "SubnetCIDRBlock");
        assert_eq!(go_field_name("_private__name"), "PrivateName");
    }
}
