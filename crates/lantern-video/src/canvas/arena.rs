use super::DrawingRequest;

/// Handle to a request stored in a [`RequestArena`].
///
/// Handles carry the arena generation they were issued in; after
/// [`RequestArena::reset`] every older handle resolves to `None`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RequestHandle {
    index: u32,
    generation: u32,
}

/// Frame-scoped request storage.
///
/// Requests are appended and never freed individually; `reset()` drops them
/// all at once and bumps the generation. Capacity is kept for reuse, so a
/// warmed arena does not allocate per frame.
#[derive(Debug, Default)]
pub struct RequestArena {
    slots: Vec<DrawingRequest>,
    generation: u32,
}

impl RequestArena {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `request` and returns its handle. O(1) amortised.
    #[inline]
    pub fn alloc(&mut self, request: DrawingRequest) -> RequestHandle {
        let index = self.slots.len() as u32;
        self.slots.push(request);
        RequestHandle { index, generation: self.generation }
    }

    /// Resolves a handle issued since the last reset.
    #[inline]
    pub fn get(&self, handle: RequestHandle) -> Option<&DrawingRequest> {
        if handle.generation != self.generation {
            return None;
        }
        self.slots.get(handle.index as usize)
    }

    /// Drops every stored request and invalidates all outstanding handles.
    #[inline]
    pub fn reset(&mut self) {
        self.slots.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
