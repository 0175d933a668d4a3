use super::*;
use proptest::prelude::*;

/// npm パッケージ名に使える文字列
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,14}".prop_map(|s| s)
}

/// import で使う識別子
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,9}".prop_map(|s| s)
}

proptest! {
    /// スコープ付き指定子のパッケージIDは先頭2セグメント
    #[test]
    fn prop_scoped_package_id_keeps_two_segments(
        scope in segment_strategy(),
        name in segment_strategy(),
        rest in prop::collection::vec(segment_strategy(), 0..3)
    ) {
        let mut specifier = format!("@{}/{}", scope, name);
        for part in &rest {
            specifier.push('/');
            specifier.push_str(part);
        }

        prop_assert_eq!(package_id(&specifier), Some(format!("@{}/{}", scope, name)));
    }

    /// スコープなし指定子のパッケージIDは先頭セグメント
    #[test]
    fn prop_unscoped_package_id_keeps_first_segment(
        name in segment_strategy(),
        rest in prop::collection::vec(segment_strategy(), 0..3)
    ) {
        let specifier = std::iter::once(name.clone()).chain(rest).collect::<Vec<_>>().join("/");
        prop_assert_eq!(package_id(&specifier), Some(name));
    }

    /// 相対パスは常に除外
    #[test]
    fn prop_relative_specifiers_are_rejected(
        up in prop::bool::ANY,
        path in segment_strategy()
    ) {
        let specifier = if up { format!("../{}", path) } else { format!("./{}", path) };
        prop_assert_eq!(package_id(&specifier), None);
    }

    /// どの import 形式でも指定子はちょうど1回捕捉される
    #[test]
    fn prop_each_import_form_is_captured_once(
        form in 0usize..4,
        binding in ident_strategy(),
        other in ident_strategy(),
        module in segment_strategy()
    ) {
        let statement = match form {
            0 => format!("import {} from '{}';", binding, module),
            1 => format!("import {{ {}, {} }} from \"{}\";", binding, other, module),
            2 => format!("import * as {} from '{}';", binding, module),
            _ => format!("import {}, {{ {} }} from \"{}\";", binding, other, module),
        };

        let captured: Vec<&str> = import_specifiers(&statement).collect();
        prop_assert_eq!(captured, vec![module.as_str()]);
    }
}
