use varstore::store::DataStore;
use varstore::{evaluate_expr, utils, Query};

fn distro_store() -> DataStore {
    let mut store = DataStore::new();
    store.set_var("DISTRO_FEATURES", "systemd pam usrmerge");
    store
}

#[test]
fn systemd_feature_is_present() {
    let store = distro_store();
    assert!(utils::contains("DISTRO_FEATURES", "systemd", true, false, &store));
}

#[test]
fn missing_feature_is_absent() {
    let store = distro_store();
    assert!(!utils::contains("DISTRO_FEATURES", "nothere", true, false, &store));
}

#[test]
fn unset_variable_yields_failure_value_for_any_token() {
    let store = distro_store();
    for token in ["systemd", "nothere", ""] {
        assert_eq!(utils::contains("IMAGE_FEATURES", token, "yes", "no", &store), "no");
    }
}

#[test]
fn substring_of_another_token_does_not_match() {
    let mut store = DataStore::new();
    store.set_var("DISTRO_FEATURES", "systemd2 pam");

    assert!(!utils::contains("DISTRO_FEATURES", "systemd", true, false, &store));
}

#[test]
fn repeated_checks_against_unmodified_store_agree() {
    let store = distro_store();
    let first = utils::contains("DISTRO_FEATURES", "pam", true, false, &store);
    for _ in 0..5 {
        assert_eq!(utils::contains("DISTRO_FEATURES", "pam", true, false, &store), first);
    }
}

#[test]
fn stored_token_order_does_not_matter() {
    let mut store = distro_store();
    let before = utils::contains("DISTRO_FEATURES", "usrmerge", true, false, &store);

    store.set_var("DISTRO_FEATURES", "usrmerge systemd pam");
    let after = utils::contains("DISTRO_FEATURES", "usrmerge", true, false, &store);

    assert_eq!(before, after);
}

#[test]
fn expression_layer_drives_the_same_checks() {
    let store = distro_store();

    let result =
        evaluate_expr("${@contains('DISTRO_FEATURES', 'systemd', 'True', 'False', d)}", &store)
            .unwrap();
    assert_eq!(result, "True");

    let result =
        evaluate_expr("${@contains('DISTRO_FEATURES', 'nothere', 'True', 'False', d)}", &store)
            .unwrap();
    assert_eq!(result, "False");
}

#[test]
fn parsed_query_can_be_reused() {
    let store = distro_store();
    let query = Query::from_expr("contains('DISTRO_FEATURES', 'pam', 'with-pam', '', d)").unwrap();

    assert_eq!(query.evaluate(&store), "with-pam");
    assert_eq!(query.evaluate(&store), "with-pam");
}

#[test]
fn filter_reports_the_supported_subset() {
    let store = distro_store();

    let result =
        evaluate_expr("${@filter('DISTRO_FEATURES', 'pam systemd selinux', d)}", &store).unwrap();
    assert_eq!(result, "pam systemd");
}
