mod common;

use common::RecordingHost;
use proptest::prelude::*;
use pwd_meter_widget::{
    resolve_id, Attributes, InputWidgetContext, PasswordInput, PasswordInputConfig, Placement,
    Region, VerdictEntry, VerdictLevel, VerdictTable,
};

// --- STRATEGIES ---

fn arb_class() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}( [a-z][a-z0-9-]{0,12})?"
}

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,16}"
}

prop_compose! {
    fn arb_verdicts()(
        classes in proptest::collection::vec(arb_class(), 6),
        order in Just((0..6).collect::<Vec<usize>>()).prop_shuffle()
    ) -> Vec<VerdictEntry> {
        order
            .into_iter()
            .map(|i| VerdictEntry::new(VerdictLevel::ALL[i], classes[i].clone()))
            .collect()
    }
}

fn arb_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::Meter),
        Just(Region::Bar),
        Just(Region::Score),
        Just(Region::Verdict),
        Just(Region::Toggle),
        Just(Region::Container),
    ]
}

proptest! {
    #[test]
    fn prop_verdict_table_is_ordered(entries in arb_verdicts()) {
        let table = VerdictTable::new(&entries).unwrap();
        prop_assert_eq!(table.styled().len(), 6);
        for (i, fragment) in table.styled().iter().enumerate() {
            let level = VerdictLevel::ALL[i];
            let class = &entries.iter().find(|e| e.level == level).unwrap().class;
            let expected_class = format!("class=\"{}\"", class);
            let expected_label = format!(">{}<", level.label());
            prop_assert!(fragment.contains(&expected_class));
            prop_assert!(fragment.contains(&expected_label));
        }
    }

    #[test]
    fn prop_resolve_id_respects_override(
        region in arb_region(),
        base in arb_id(),
        preset in proptest::option::of(arb_id())
    ) {
        let mut attrs = Attributes::from([("class", "x")]);
        if let Some(id) = &preset {
            attrs.insert("id", id.clone());
        }
        let resolved = resolve_id(&mut attrs, region, &base);
        match preset {
            Some(id) => prop_assert_eq!(&resolved, &id),
            None => prop_assert_eq!(&resolved, &format!("{}-{}", base, region.suffix())),
        }
        prop_assert_eq!(attrs.get("id"), Some(resolved.as_str()));
    }

    #[test]
    fn prop_scripts_share_payload(
        base in arb_id(),
        verdicts in arb_verdicts(),
        right in any::<bool>(),
        native in any::<bool>()
    ) {
        let host = if native { RecordingHost::native() } else { RecordingHost::generic() };
        let placement = if right { Placement::Right } else { Placement::None };
        let config = PasswordInputConfig::default()
            .with_verdicts(verdicts)
            .with_placement(placement);
        let context = InputWidgetContext::new(&host, "Form", "password")
            .with_options(Attributes::from([("id", base.as_str())]));
        let rendered = PasswordInput::new(context, config).render().unwrap();
        let scripts = rendered.scripts.unwrap();

        prop_assert_eq!(&scripts.keyup, &format!("checkPwd(this.value, {})", scripts.payload()));
        prop_assert_eq!(&scripts.on_load, &format!("initMeter({})", scripts.payload()));

        let value: serde_json::Value = serde_json::from_str(scripts.payload()).unwrap();
        let expected_pwd = format!("#{}", base);
        prop_assert_eq!(value["elPwd"].as_str(), Some(expected_pwd.as_str()));
    }
}
