pub mod nodes;

#[macro_use]
pub mod macros {
    #[macro_export]
    macro_rules! command_with_aliases {
        ($name: literal, $a: expr, $e: expr, $invoker_permissions: expr, $group: expr) => {{
            Arc::new(CommandNode {
                name: String::from($name),
                handler: Box::new(move |ctx| Box::pin($e(ctx))),
                invoker_permissions: $invoker_permissions,
                group: $group,
                aliases: $a,
            })
        }};
    }

    #[macro_export]
    macro_rules! command {
        ($name: literal, $e: expr, $invoker_permissions: expr, $group: expr) => {
            $crate::command_with_aliases!($name, vec![], $e, $invoker_permissions, $group)
        };
    }
}
