//! Static knowledge base of pre-vetted tool recommendations.
//!
//! Keys are `trimmed task + "|" + resolved standard full name`, matched
//! exactly. Only the compliance name is normalized upstream; the task text is
//! not. Entries are authored offline and loaded once at startup.

use grc_common::ToolRecommendation;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static KNOWLEDGE_BASE: Lazy<HashMap<&'static str, Vec<ToolRecommendation>>> = Lazy::new(|| {
    let mut kb = HashMap::new();

    kb.insert(
        "All servers should have an AntiMalware tool installed|ISO/IEC 27001",
        vec![
            ToolRecommendation::new(
                "Microsoft Defender",
                "1. Open Settings > Update & Security > Windows Security.\n2. Click 'Virus & Threat Protection' and configure settings.\n3. Enable real-time protection.\n4. Set regular scan schedules.\n5. Monitor threat history and logs.",
            ),
            ToolRecommendation::new(
                "Sophos Intercept X",
                "1. Sign up at Sophos Central.\n2. Download and install Intercept X agent.\n3. Assign the device to a policy.\n4. Configure malware and exploit protection.\n5. Monitor alerts via Sophos Central dashboard.",
            ),
            ToolRecommendation::new(
                "McAfee Endpoint Security",
                "1. Download McAfee installer from the ePO.\n2. Install it on the server.\n3. Configure policies through ePO console.\n4. Enable On-Access and On-Demand scans.\n5. Review logs and update signatures regularly.",
            ),
            ToolRecommendation::new(
                "Bitdefender GravityZone",
                "1. Log into GravityZone portal.\n2. Create and assign endpoint policies.\n3. Deploy the agent on target servers.\n4. Configure antimalware and firewall settings.\n5. Schedule reports and monitor security status.",
            ),
            ToolRecommendation::new(
                "Kaspersky Endpoint Security",
                "1. Install Kaspersky Security Center.\n2. Deploy Kaspersky Endpoint Security agent.\n3. Apply relevant security policies.\n4. Set up scanning schedules.\n5. Monitor results and threat reports from the console.",
            ),
        ],
    );

    kb.insert(
        "All user accounts should have MFA enabled|ISO/IEC 27001",
        vec![
            ToolRecommendation::new(
                "Microsoft Azure AD MFA",
                "1. Go to Azure portal > Users > MFA.\n2. Enable MFA for target users.\n3. Configure verification methods.\n4. Instruct users to register via https://aka.ms/mfasetup.\n5. Monitor MFA status from Azure AD logs.",
            ),
            ToolRecommendation::new(
                "Google Authenticator",
                "1. Install app on device.\n2. Enable 2FA in user account settings.\n3. Scan QR code or enter secret key.\n4. Verify setup with OTP.\n5. Use the app to approve future logins.",
            ),
            ToolRecommendation::new(
                "Okta MFA",
                "1. Login to Okta admin portal > Security > Multifactor.\n2. Enable desired factor (e.g., SMS, Okta Verify).\n3. Assign policies to user groups.\n4. Users enroll at next login.\n5. Review MFA logs and dashboard for activity.",
            ),
            ToolRecommendation::new(
                "Authy",
                "1. Install Authy app on mobile device.\n2. Register using phone number and email.\n3. Link to user accounts supporting TOTP.\n4. Use Authy for login verifications.\n5. Enable backups and multi-device sync if needed.",
            ),
            ToolRecommendation::new(
                "Duo Security",
                "1. Create Duo account > Configure integrations.\n2. Install Duo Authentication Proxy if needed.\n3. Link Duo with your identity provider.\n4. Users install Duo Mobile and enroll.\n5. Monitor access logs and enforce device policies.",
            ),
        ],
    );

    kb
});

/// Exact-match lookup. `None` is the expected miss branch, not an error.
pub fn lookup(task: &str, standard_full_name: &str) -> Option<Vec<ToolRecommendation>> {
    let key = format!("{}|{}", task.trim(), standard_full_name);
    KNOWLEDGE_BASE.get(key.as_str()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_returns_five_pre_authored_records() {
        let tools = lookup(
            "All servers should have an AntiMalware tool installed",
            "ISO/IEC 27001",
        )
        .unwrap();
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0].tool, "Microsoft Defender");
        assert!(tools[0].steps.starts_with("1. Open Settings"));
    }

    #[test]
    fn test_task_is_trimmed_before_keying() {
        let tools = lookup(
            "  All user accounts should have MFA enabled  ",
            "ISO/IEC 27001",
        );
        assert!(tools.is_some());
    }

    #[test]
    fn test_task_text_is_not_normalized() {
        let tools = lookup(
            "all servers should have an antimalware tool installed",
            "ISO/IEC 27001",
        );
        assert!(tools.is_none());
    }

    #[test]
    fn test_miss_on_unknown_combination() {
        let tools = lookup(
            "All servers should have an AntiMalware tool installed",
            "General Data Protection Regulation",
        );
        assert!(tools.is_none());
    }

    #[test]
    fn test_lookup_is_pure() {
        let a = lookup(
            "All user accounts should have MFA enabled",
            "ISO/IEC 27001",
        );
        let b = lookup(
            "All user accounts should have MFA enabled",
            "ISO/IEC 27001",
        );
        assert_eq!(a, b);
    }
}
