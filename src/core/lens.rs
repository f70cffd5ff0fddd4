//! Field accessors from an aggregate to one of its case machines.

use std::fmt;
use std::rc::Rc;

type Getter<A, M> = Rc<dyn Fn(&A) -> Option<&M>>;
type Setter<A, M> = Rc<dyn Fn(&mut A) -> Option<&mut M>>;

/// Read/write path from an aggregate `A` to a field of type `M`.
///
/// A path may be partial: a machine nested inside one variant's payload is
/// only reachable while that variant is active. Reading or writing through
/// an unreachable path yields `None`, and arrows treat that as a guard miss.
///
/// Use [`Lens::identity`] for machines that are their own aggregate, the
/// [`lens!`](crate::lens) macro for named struct fields and variant payload
/// fields, and [`Lens::then`] to reach through several levels.
///
/// # Example
///
/// ```rust
/// use casemachines::core::Lens;
///
/// struct Pair {
///     left: u8,
///     right: u8,
/// }
///
/// let right = Lens::<Pair, u8>::new(|pair| &pair.right, |pair| &mut pair.right);
/// let mut pair = Pair { left: 1, right: 2 };
///
/// if let Some(value) = right.get_mut(&mut pair) {
///     *value += 40;
/// }
/// assert_eq!(right.get(&pair), Some(&42));
/// assert_eq!(pair.left, 1);
/// ```
pub struct Lens<A, M> {
    get: Getter<A, M>,
    get_mut: Setter<A, M>,
}

impl<A, M> Lens<A, M> {
    /// Build a lens for a field that is always present.
    pub fn new<G, S>(get: G, get_mut: S) -> Self
    where
        G: Fn(&A) -> &M + 'static,
        S: Fn(&mut A) -> &mut M + 'static,
    {
        Self::partial(move |whole| Some(get(whole)), move |whole| Some(get_mut(whole)))
    }

    /// Build a lens for a field that may be absent.
    ///
    /// Both halves must agree on when the field is reachable.
    pub fn partial<G, S>(get: G, get_mut: S) -> Self
    where
        G: Fn(&A) -> Option<&M> + 'static,
        S: Fn(&mut A) -> Option<&mut M> + 'static,
    {
        Self {
            get: Rc::new(get),
            get_mut: Rc::new(get_mut),
        }
    }

    /// Borrow the field, if reachable.
    pub fn get<'a>(&self, whole: &'a A) -> Option<&'a M> {
        (self.get)(whole)
    }

    /// Mutably borrow the field, if reachable.
    pub fn get_mut<'a>(&self, whole: &'a mut A) -> Option<&'a mut M> {
        (self.get_mut)(whole)
    }

    /// Extend this path with a path into the field.
    ///
    /// The result is reachable only where both halves are.
    pub fn then<N>(self, inner: Lens<M, N>) -> Lens<A, N>
    where
        A: 'static,
        M: 'static,
        N: 'static,
    {
        let (outer, outer_mut) = (self.clone(), self);
        let (inner, inner_mut) = (inner.clone(), inner);
        Lens::partial(
            move |whole| outer.get(whole).and_then(|field| inner.get(field)),
            move |whole| {
                outer_mut
                    .get_mut(whole)
                    .and_then(|field| inner_mut.get_mut(field))
            },
        )
    }
}

impl<A> Lens<A, A> {
    /// The lens that addresses the whole aggregate.
    pub fn identity() -> Self {
        Self::new(|whole| whole, |whole| whole)
    }
}

impl<A, M> Clone for Lens<A, M> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            get_mut: Rc::clone(&self.get_mut),
        }
    }
}

impl<A, M> fmt::Debug for Lens<A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens")
            .field("whole", &std::any::type_name::<A>())
            .field("field", &std::any::type_name::<M>())
            .finish()
    }
}
