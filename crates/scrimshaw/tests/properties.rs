//! Property-based tests for the indentation engine and display policies.

use proptest::prelude::*;

use scrimshaw::prelude::*;

fn visibilities() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Private),
        Just(Visibility::Protected),
        Just(Visibility::PackagePrivate),
        Just(Visibility::Public),
    ]
}

fn visibility_sets() -> impl Strategy<Value = VisibilitySet> {
    prop_oneof![
        Just(VisibilitySet::PUBLIC),
        Just(VisibilitySet::PROTECTED),
        Just(VisibilitySet::PACKAGE),
        Just(VisibilitySet::ALL),
    ]
}

proptest! {
    #[test]
    fn prop_lines_carry_indent_prefix(
        lines in prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ]{0,11}", 1..6),
        depth in 0usize..5,
        width in 1usize..5,
    ) {
        let mut out = IndentingWriter::new(Indentation::spaces(width));
        for _ in 0..depth {
            out.indent();
        }
        // One bulk append with embedded newlines, not per-line calls.
        out.append(&lines.join("\n"));
        let text = out.into_string();

        let prefix = " ".repeat(depth * width);
        for (i, line) in text.lines().enumerate() {
            prop_assert!(line.starts_with(&prefix), "line {} lacks prefix: {:?}", i, line);
            prop_assert!(!line[prefix.len()..].starts_with(' '));
        }
    }

    #[test]
    fn prop_unindent_never_goes_negative(extra in 0usize..8) {
        let mut out = IndentingWriter::new(Indentation::DEFAULT);
        for _ in 0..extra {
            out.unindent();
        }
        out.append("flush left");
        prop_assert_eq!(out.as_str(), "flush left");
    }

    #[test]
    fn prop_display_is_idempotent(
        package in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
        simple in "[A-Z][a-zA-Z0-9]{0,8}",
    ) {
        let name = TypeName::new(Some(package.as_str()), &simple);
        for display in [
            TypeDisplay::None,
            TypeDisplay::Simple,
            TypeDisplay::Qualified,
            TypeDisplay::QualifiedGenerics,
        ] {
            let first = name.to_display(display, None);
            let second = name.to_display(display, None);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_qualified_strips_exactly_one_prefix(
        package in "[a-z]{1,8}",
        simple in "[A-Z][a-zA-Z]{0,8}",
    ) {
        let ns = Namespace::new(&package);
        let name = TypeName::new(Some(package.as_str()), &simple);
        prop_assert_eq!(name.to_display(TypeDisplay::Qualified, Some(&ns)), simple);
    }

    #[test]
    fn prop_member_rendered_iff_visibility_included(
        visibility in visibilities(),
        set in visibility_sets(),
    ) {
        let mut config = Configuration::default();
        config.fields.visibilities = set;
        let field = Field::new("sample", Some(TypeName::new(None, "int")))
            .unwrap()
            .with_visibility(visibility);

        let ctx = RenderContext::new(&config);
        let mut out = IndentingWriter::new(Indentation::DEFAULT);
        field.write_to(&ctx, &mut out);

        prop_assert_eq!(!out.as_str().is_empty(), set.contains(visibility));
    }
}
