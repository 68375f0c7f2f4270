//! Property tests for the admin -> user name delegation.

use proptest::prelude::*;

use notifier::{Admin, User};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an admin's name is always the name of the user it embeds.
    #[test]
    fn property_admin_name_matches_user(
        name in "(?s).{0,64}",
        email in "(?s).{0,64}",
    ) {
        let user = User::new(name.clone());
        let admin = Admin::new(user.clone(), email.clone());

        prop_assert_eq!(admin.name(), user.name());
        prop_assert_eq!(admin.user(), &user);
        prop_assert_eq!(admin.email(), email.as_str());
    }
}
