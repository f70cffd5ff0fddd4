//! Macros for ergonomic machine construction.

/// Generate a case machine enum together with its `StateChart`,
/// `CaseMachine` and per-variant `Case` implementations.
///
/// Every variant wraps exactly one payload type and payload types must be
/// distinct, since each payload implements `Case` once. The `initial`
/// variant is built from its payload's `Default`. Optional enter/leave
/// hooks are closures over the payload. The machine's `on_init` is the
/// `on_enter` of its current case.
///
/// # Example
///
/// ```
/// use casemachines::case_machine;
/// use casemachines::core::{Case, CaseMachine, StateChart};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub enum Signal {
///     Started,
/// }
///
/// #[derive(Clone, Debug, PartialEq, Default)]
/// pub struct Idle;
///
/// #[derive(Clone, Debug, PartialEq, Default)]
/// pub struct Running {
///     pub jobs: u32,
/// }
///
/// case_machine! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub enum Worker {
///         Idle(Idle),
///         Running(Running) => {
///             on_enter: |_| Some(Signal::Started),
///         },
///     }
///     effect: Signal,
///     initial: Idle,
/// }
///
/// let mut worker = Worker::default();
/// assert!(Idle::extract(&worker).is_some());
///
/// Running { jobs: 1 }.embed(&mut worker);
/// assert_eq!(worker.on_enter(), Some(Signal::Started));
/// assert_eq!(worker.on_init(), Some(Signal::Started));
/// ```
#[macro_export]
macro_rules! case_machine {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty)
                $( => {
                    $(on_enter: $enter:expr,)?
                    $(on_leave: $leave:expr,)?
                } )?
            ),+ $(,)?
        }
        effect: $effect:ty,
        initial: $initial:ident $(,)?
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload)
            ),+
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$initial(::core::default::Default::default())
            }
        }

        impl $crate::core::StateChart for $name {
            type Effect = $effect;

            fn on_init(&self) -> ::core::option::Option<$effect> {
                $crate::core::CaseMachine::on_enter(self)
            }
        }

        impl $crate::core::CaseMachine for $name {
            type Discriminant = ::std::mem::Discriminant<Self>;

            fn discriminant(&self) -> Self::Discriminant {
                ::std::mem::discriminant(self)
            }

            fn on_enter(&self) -> ::core::option::Option<$effect> {
                match self {
                    $(Self::$variant(case) => $crate::core::Case::on_enter(case),)+
                }
            }

            fn on_leave(&self) -> ::core::option::Option<$effect> {
                match self {
                    $(Self::$variant(case) => $crate::core::Case::on_leave(case),)+
                }
            }
        }

        $(
            impl $crate::core::Case for $payload {
                type Machine = $name;
                type Effect = $effect;

                #[allow(unreachable_patterns)]
                fn extract(machine: &$name) -> ::core::option::Option<&Self> {
                    match machine {
                        $name::$variant(case) => ::core::option::Option::Some(case),
                        _ => ::core::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn extract_mut(machine: &mut $name) -> ::core::option::Option<&mut Self> {
                    match machine {
                        $name::$variant(case) => ::core::option::Option::Some(case),
                        _ => ::core::option::Option::None,
                    }
                }

                fn embed(self, machine: &mut $name) {
                    *machine = $name::$variant(self);
                }

                fn on_enter(&self) -> ::core::option::Option<$effect> {
                    $crate::__case_hook!(self $($(, $enter)?)?)
                }

                fn on_leave(&self) -> ::core::option::Option<$effect> {
                    $crate::__case_hook!(self $($(, $leave)?)?)
                }
            }
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __case_hook {
    ($case:expr) => {
        ::core::option::Option::None
    };
    ($case:expr, $hook:expr) => {
        ($hook)($case)
    };
}

/// Build a [`Lens`](crate::core::Lens) for a named field of an aggregate,
/// or for a field inside one variant's payload.
///
/// The variant form is partial: it yields `None` while another variant is
/// active. Chain it after a struct field with [`Lens::then`](crate::core::Lens::then)
/// to reach a machine nested inside a case.
///
/// ```
/// use casemachines::lens;
///
/// struct Stage {
///     lights: u8,
/// }
///
/// struct Show {
///     cue: u8,
/// }
///
/// enum Act {
///     Intermission,
///     Playing(Show),
/// }
///
/// let lights = lens!(Stage => lights);
/// assert_eq!(lights.get(&Stage { lights: 3 }), Some(&3));
///
/// let cue = lens!(Act::Playing => cue);
/// assert_eq!(cue.get(&Act::Playing(Show { cue: 4 })), Some(&4));
/// assert_eq!(cue.get(&Act::Intermission), None);
/// ```
#[macro_export]
macro_rules! lens {
    ($machine:ident :: $variant:ident => $field:ident) => {
        $crate::core::Lens::<$machine, _>::partial(
            |whole| match whole {
                $machine::$variant(case) => ::core::option::Option::Some(&case.$field),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |whole| match whole {
                $machine::$variant(case) => ::core::option::Option::Some(&mut case.$field),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
        )
    };
    ($whole:ty => $field:ident) => {
        $crate::core::Lens::<$whole, _>::new(|whole| &whole.$field, |whole| &mut whole.$field)
    };
}

/// Implement [`Arrow`](crate::arrows::Arrow) for types that implement one of
/// the arrow kind traits, forwarding to that kind's shared behaviour.
///
/// Generic arrow types cannot be listed here; implement `Arrow` for them by
/// hand using the free functions in the kind's module.
///
/// ```
/// use casemachines::arrows::{Arrow, Do};
/// use casemachines::core::StateChart;
/// use casemachines::impl_arrow;
///
/// struct Board;
///
/// impl StateChart for Board {
///     type Effect = &'static str;
/// }
///
/// struct Ping;
///
/// impl Do for Ping {
///     type Aggregate = Board;
///
///     fn effect(&self) -> &'static str {
///         "ping"
///     }
/// }
///
/// impl_arrow!(Do: Ping);
///
/// let effects = Ping.execute(&mut Board);
/// assert_eq!(effects.on_transition, vec!["ping"]);
/// ```
#[macro_export]
macro_rules! impl_arrow {
    (Do: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward Do, emit, should_run, execute; $($arrow),+);
    };
    (Move: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward MoveSignature, moves, should_run, execute_move; $($arrow),+);
    };
    (PureMove: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward MoveSignature, moves, should_run, execute_pure_move; $($arrow),+);
    };
    (GoTo: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward MoveSignature, moves, should_run, execute_go_to; $($arrow),+);
    };
    (CaseMethod: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward MethodSignature, methods, should_run, execute_method; $($arrow),+);
    };
    (PureMethod: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward MethodSignature, methods, should_run, execute_pure_method; $($arrow),+);
    };
    (Coordinated: $($arrow:ty),+ $(,)?) => {
        $crate::impl_arrow!(@forward Coordinated, coordinated, should_run, execute; $($arrow),+);
    };
    (@forward $kind:ident, $module:ident, $guard:ident, $run:ident; $($arrow:ty),+) => {
        $(
            impl $crate::arrows::Arrow<<$arrow as $crate::arrows::$kind>::Aggregate> for $arrow {
                fn should_run(&self, state: &<$arrow as $crate::arrows::$kind>::Aggregate) -> bool {
                    $crate::arrows::$module::$guard(self, state)
                }

                fn execute(
                    &self,
                    state: &mut <$arrow as $crate::arrows::$kind>::Aggregate,
                ) -> $crate::core::Effects<
                    $crate::core::EffectOf<<$arrow as $crate::arrows::$kind>::Aggregate>,
                > {
                    $crate::arrows::$module::$run(self, state)
                }
            }
        )+
    };
}

/// Build an [`IfAll`](crate::arrows::IfAll) from a list of arrows.
///
/// Every arrow's guard must hold before any of them runs.
#[macro_export]
macro_rules! if_all {
    ($($arrow:expr),* $(,)?) => {
        $crate::arrows::IfAll::new()$(.with($arrow))*
    };
}

/// Build an [`IfAny`](crate::arrows::IfAny) from a list of arrows.
///
/// Every arrow whose guard holds runs, in order.
#[macro_export]
macro_rules! if_any {
    ($($arrow:expr),* $(,)?) => {
        $crate::arrows::IfAny::new()$(.with($arrow))*
    };
}
