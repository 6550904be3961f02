// crates/domain/tests/mismatch_props.rs
use metaextract_domain::{FileName, FileSize, FileTimes, FileType, Metadata, extension_mismatch};
use proptest::prelude::*;

fn ext() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,5}"
}

proptest! {
    #[test]
    fn own_extension_never_mismatches(e in ext()) {
        let file_ext = format!(".{e}");
        prop_assert!(!extension_mismatch(&file_ext, &e));
        prop_assert!(!extension_mismatch(&file_ext, &file_ext));
    }

    #[test]
    fn any_listed_alternative_matches(alts in prop::collection::vec(ext(), 2..5), pick in any::<prop::sample::Index>()) {
        let chosen = pick.get(&alts).clone();
        let detected = alts.join("/");
        let file_ext = format!(".{chosen}");
        prop_assert!(!extension_mismatch(&file_ext, &detected));
    }

    #[test]
    fn unlisted_extension_mismatches(alts in prop::collection::vec(ext(), 1..5), other in ext()) {
        prop_assume!(!alts.contains(&other));
        let detected = alts.join("/");
        let file_ext = format!(".{other}");
        prop_assert!(extension_mismatch(&file_ext, &detected));
    }

    #[test]
    fn flag_follows_the_top_candidate(stem in "[a-z]{1,8}", own in ext(), top in ext(), rest in ext()) {
        let mut meta = Metadata::new(FileName::new(format!("{stem}.{own}")), FileSize::zero(), FileTimes::default());
        meta.record_types(vec![FileType::new("top", "", top.clone()), FileType::new("rest", "", rest)]);
        prop_assert_eq!(meta.ext_mismatch(), own != top);
    }
}
