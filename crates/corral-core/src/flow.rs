//! Three-way callback result for traversals.

/// What a `filter`/`each` callback wants done with the current item.
///
/// `Stop` ends the traversal. The item that returned `Stop` is not kept,
/// and nothing after it is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Keep,
    Drop,
    Stop,
}

impl Flow {
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

impl From<bool> for Flow {
    fn from(keep: bool) -> Self {
        if keep { Self::Keep } else { Self::Drop }
    }
}

/// Callbacks that return nothing continue the traversal.
impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Self::Keep
    }
}

impl<B, C> From<std::ops::ControlFlow<B, C>> for Flow {
    fn from(flow: std::ops::ControlFlow<B, C>) -> Self {
        match flow {
            std::ops::ControlFlow::Continue(_) => Self::Keep,
            std::ops::ControlFlow::Break(_) => Self::Stop,
        }
    }
}
