//! Tests for the transformation context module

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_record_keeps_order_and_library() {
    let mut ctx = TransformationContext::new();
    assert!(ctx.is_empty());

    ctx.record(
        "antd",
        TransformationType::ImportInjected {
            source: "antd/lib/button".to_owned(),
            local: "_Button".to_owned(),
        },
    );
    ctx.record(
        "lodash",
        TransformationType::SymbolRewritten {
            local: "map".to_owned(),
            symbol: "map".to_owned(),
        },
    );
    ctx.record(
        "antd",
        TransformationType::BarrelImportRemoved {
            node: NodeId::new(1),
        },
    );

    assert_eq!(ctx.transformations.len(), 3);
    assert_eq!(ctx.transformations[1].library, "lodash");

    let antd: Vec<_> = ctx
        .for_library("antd")
        .map(|record| &record.transformation_type)
        .collect();
    assert_eq!(
        antd,
        vec![
            &TransformationType::ImportInjected {
                source: "antd/lib/button".to_owned(),
                local: "_Button".to_owned(),
            },
            &TransformationType::BarrelImportRemoved {
                node: NodeId::new(1),
            },
        ]
    );
}

#[test]
fn test_transformation_stats() {
    let mut ctx = TransformationContext::new();

    for _ in 0..2 {
        ctx.record(
            "antd",
            TransformationType::SymbolRewritten {
                local: "Button".to_owned(),
                symbol: "Button".to_owned(),
            },
        );
    }
    ctx.record(
        "antd",
        TransformationType::NamespaceMemberCollapsed {
            namespace: "Lib".to_owned(),
            symbol: "Input".to_owned(),
        },
    );
    ctx.record(
        "antd",
        TransformationType::SideEffectInjected {
            source: "antd/lib/button/style".to_owned(),
        },
    );

    let stats = ctx.get_stats();
    assert_eq!(
        stats,
        TransformStats {
            total_transformations: 4,
            symbols_rewritten: 2,
            namespace_members_collapsed: 1,
            imports_injected: 0,
            side_effects_injected: 1,
            barrel_imports_removed: 0,
        }
    );
    assert_eq!(
        stats.to_string(),
        "2 rewrites, 1 namespace accesses, 0 imports injected, 1 style imports, 0 barrel imports \
         removed"
    );
}
