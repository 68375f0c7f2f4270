//! Property tests for notification rendering.

use proptest::prelude::*;

use notifier::{Admin, NotificationKind, Notifier, User};

fn printable() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .@_-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a user notification names the user verbatim when printable.
    #[test]
    fn property_user_message_names_user(name in printable()) {
        let n = User::new(name.clone()).notification();

        prop_assert_eq!(n.kind(), NotificationKind::User);
        prop_assert!(!n.message().contains('\n'));
        prop_assert_eq!(n.message(), format!("User: Sending user email to {name}"));
    }

    /// PROPERTY: an admin notification names the embedded user and quotes the email.
    #[test]
    fn property_admin_message_quotes_email(name in printable(), email in printable()) {
        let n = Admin::new(User::new(name.clone()), email.clone()).notification();

        prop_assert_eq!(n.kind(), NotificationKind::Admin);
        prop_assert_eq!(
            n.message(),
            format!("Admin: Sending admin email to {name}. The email address is \"{email}\".")
        );
    }

    /// PROPERTY: any name and email, control characters included, render to
    /// exactly one line.
    #[test]
    fn property_message_is_always_one_line(
        name in "(?s).{0,64}",
        email in "(?s).{0,64}",
    ) {
        let notifiers: Vec<Box<dyn Notifier>> = vec![
            Box::new(User::new(name.clone())),
            Box::new(Admin::new(User::new(name), email)),
        ];
        for notifier in &notifiers {
            let n = notifier.notification();
            prop_assert!(!n.message().contains('\n'), "message: {:?}", n.message());
            prop_assert!(!n.message().contains('\r'), "message: {:?}", n.message());
        }
    }

    /// PROPERTY: rendering never panics, whatever the input.
    #[test]
    fn property_rendering_never_panics(name in "(?s).{0,128}", email in "(?s).{0,128}") {
        let notifiers: Vec<Box<dyn Notifier>> = vec![
            Box::new(User::new(name.clone())),
            Box::new(Admin::new(User::new(name), email)),
        ];
        for notifier in &notifiers {
            let _ = notifier.notification().to_string();
        }
    }
}
