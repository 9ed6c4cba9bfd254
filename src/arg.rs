//! Positional argument values.
//!
//! Mock invocations carry their arguments as a slice of [`Arg`]. Equality
//! between two `Arg`s is strict: primitives compare by value, object
//! references compare by identity.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A single positional argument passed to a mock callable.
#[derive(Clone)]
pub enum Arg {
    /// An absent argument. Missing invocation positions compare as this.
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    /// A shared object, compared by reference.
    Ref(ArgRef),
}

impl Arg {
    /// Wrap a value into a fresh object reference.
    ///
    /// Every call allocates a new identity, so two objects built from equal
    /// values never match each other. Clone the returned `Arg` to pass the
    /// same reference twice.
    pub fn object<T: Any>(value: T) -> Self {
        Arg::Ref(ArgRef::new(value))
    }

    /// Strict equality as used by rule matching.
    pub fn strict_eq(&self, other: &Arg) -> bool {
        match (self, other) {
            (Arg::Undefined, Arg::Undefined) | (Arg::Null, Arg::Null) => true,
            (Arg::Bool(a), Arg::Bool(b)) => a == b,
            (Arg::Int(a), Arg::Int(b)) => a == b,
            (Arg::Float(a), Arg::Float(b)) => a == b,
            // Numbers share one domain regardless of representation
            (Arg::Int(a), Arg::Float(b)) | (Arg::Float(b), Arg::Int(a)) => (*a as f64) == *b,
            (Arg::Str(a), Arg::Str(b)) => a == b,
            (Arg::Ref(a), Arg::Ref(b)) => a.same_ref(b),
            _ => false,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Arg::Undefined)
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the object reference, if this is one.
    pub fn as_ref_arg(&self) -> Option<&ArgRef> {
        match self {
            Arg::Ref(r) => Some(r),
            _ => None,
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Undefined => write!(f, "Undefined"),
            Arg::Null => write!(f, "Null"),
            Arg::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Arg::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Arg::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Arg::Str(s) => f.debug_tuple("Str").field(&&**s).finish(),
            Arg::Ref(r) => f.debug_tuple("Ref").field(r).finish(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Undefined => write!(f, "undefined"),
            Arg::Null => write!(f, "null"),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Str(s) => write!(f, "{:?}", s),
            Arg::Ref(r) => write!(f, "<object@{:p}>", r.addr()),
        }
    }
}

/// Reference-counted handle to an object argument.
///
/// Two handles are the same argument only if they point at the same
/// allocation.
#[derive(Clone)]
pub struct ArgRef(Rc<dyn Any>);

impl ArgRef {
    pub fn new<T: Any>(value: T) -> Self {
        ArgRef(Rc::new(value))
    }

    /// Identity comparison on the data pointer. Vtable pointers are ignored
    /// since they are not guaranteed unique per type.
    pub fn same_ref(&self, other: &ArgRef) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl fmt::Debug for ArgRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.addr())
    }
}

impl<T: Any> From<Rc<T>> for ArgRef {
    fn from(value: Rc<T>) -> Self {
        ArgRef(value)
    }
}

// --- Conversions -------------------------------------------------------------

impl From<ArgRef> for Arg {
    fn from(value: ArgRef) -> Self {
        Arg::Ref(value)
    }
}

impl<T: Any> From<Rc<T>> for Arg {
    fn from(value: Rc<T>) -> Self {
        Arg::Ref(ArgRef::from(value))
    }
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::Undefined
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(Rc::from(value))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(Rc::from(value))
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Undefined, Into::into)
    }
}

macro_rules! int_into_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

int_into_arg!(i8, i16, i32, i64, u8, u16, u32);

/// Conversion into a positional argument list.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Arg>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Arg> {
        Vec::new()
    }
}

impl IntoArgs for Vec<Arg> {
    fn into_args(self) -> Vec<Arg> {
        self
    }
}

impl<const N: usize> IntoArgs for [Arg; N] {
    fn into_args(self) -> Vec<Arg> {
        self.into()
    }
}

impl IntoArgs for &[Arg] {
    fn into_args(self) -> Vec<Arg> {
        self.to_vec()
    }
}

macro_rules! tuple_into_args {
    ($($name:ident),+) => {
        impl<$($name: Into<Arg>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Arg> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_into_args!(A);
tuple_into_args!(A, B);
tuple_into_args!(A, B, C);
tuple_into_args!(A, B, C, D);
tuple_into_args!(A, B, C, D, E);
tuple_into_args!(A, B, C, D, E, F);
tuple_into_args!(A, B, C, D, E, F, G);
tuple_into_args!(A, B, C, D, E, F, G, H);

/// Build a `Vec<Arg>` from a list of expressions convertible into [`Arg`].
///
/// ```
/// use mock_when::{args, Arg};
///
/// let list = args!["foo", 1, true];
/// assert_eq!(list[0], Arg::from("foo"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}

/// Render an argument list as `(a, b, c)` for diagnostics.
pub fn display_args(args: &[Arg]) -> String {
    let parts: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    format!("({})", parts.join(", "))
}
