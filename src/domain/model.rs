use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PLANE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneId(u64);

impl PlaneId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plane-{}", self.0)
    }
}

#[derive(Debug)]
struct PlaneState {
    id: PlaneId,
    flying: Cell<bool>,
}

/// Handle to a single plane.
///
/// Cloning a `Plane` yields another handle to the same aircraft, so an
/// airport parking a plane holds a reference to it rather than a copy.
/// Equality is identity. Only an [`Airport`](crate::Airport) changes the
/// flying status.
#[derive(Clone)]
pub struct Plane {
    state: Rc<PlaneState>,
}

impl Plane {
    pub fn new(flying: bool) -> Self {
        let id = PlaneId(NEXT_PLANE_ID.fetch_add(1, Ordering::Relaxed));
        Self {
            state: Rc::new(PlaneState {
                id,
                flying: Cell::new(flying),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> PlaneId {
        self.state.id
    }

    #[inline]
    pub fn flying(&self) -> bool {
        self.state.flying.get()
    }

    pub(crate) fn set_flying(&self, flying: bool) {
        self.state.flying.set(flying);
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for Plane {}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plane")
            .field("id", &self.id())
            .field("flying", &self.flying())
            .finish()
    }
}

/// Serializable view of an airport at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportSnapshot {
    pub name: String,
    pub capacity: usize,
    pub parked: Vec<PlaneId>,
    pub stormy: bool,
}

/// A single instruction handed to the control tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Land a fresh plane.
    Land,
    /// Launch the most recently landed plane.
    TakeOff,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Land => write!(f, "land"),
            Operation::TakeOff => write!(f, "take-off"),
        }
    }
}
