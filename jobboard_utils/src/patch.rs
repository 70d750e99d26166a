pub use jobboard_utils_derive::Patch;

/// A single field of a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchValue<T> {
    Update(T),
    #[default]
    Unchanged,
}

impl<T> PatchValue<T> {
    /// Returns the new value or falls back to `old_value`.
    pub fn update(self, old_value: T) -> T {
        match self {
            Self::Update(new_value) => new_value,
            Self::Unchanged => old_value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchValue<U> {
        match self {
            Self::Update(x) => PatchValue::Update(f(x)),
            Self::Unchanged => PatchValue::Unchanged,
        }
    }

    pub fn as_ref(&self) -> PatchValue<&T> {
        match self {
            Self::Update(x) => PatchValue::Update(x),
            Self::Unchanged => PatchValue::Unchanged,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T> From<Option<T>> for PatchValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => PatchValue::Update(x),
            None => PatchValue::Unchanged,
        }
    }
}

pub trait Patch {
    type Patch;
    type PatchRef<'a>
    where
        Self: 'a;

    /// Applies all updated fields of `patch` to `self`.
    fn update(self, patch: Self::Patch) -> Self;

    fn as_patch_ref(&self) -> Self::PatchRef<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Patch)]
    struct Posting {
        #[no_patch]
        id: u32,
        title: String,
        closed: bool,
    }

    #[test]
    fn update_changes_only_patched_fields() {
        // Arrange
        let posting = Posting {
            id: 7,
            title: "Backend Engineer".into(),
            closed: false,
        };
        let patch = PostingPatch::new().update_closed(true);

        // Act
        let result = posting.clone().update(patch);

        // Assert
        assert_eq!(
            result,
            Posting {
                closed: true,
                ..posting
            }
        );
    }

    #[test]
    fn patch_ref_mirrors_patch() {
        // Arrange
        let patch = PostingPatch::new().update_title("Designer".into());

        // Act
        let patch_ref = patch.as_ref();

        // Assert
        assert_eq!(patch_ref.title, PatchValue::Update(&"Designer".to_owned()));
        assert!(patch_ref.closed.is_unchanged());
        assert!(patch.is_update());
    }

    #[test]
    fn option_into_patch_value() {
        assert_eq!(PatchValue::from(Some(1)), PatchValue::Update(1));
        assert_eq!(PatchValue::<i32>::from(None), PatchValue::Unchanged);
        assert_eq!(PatchValue::Update(2).map(|x| x * 2), PatchValue::Update(4));
        assert_eq!(PatchValue::Unchanged.update(5), 5);
    }
}
