//! Projection of domain values onto response shapes.

/// Converts a value into a response-shaped projection of it.
pub trait Project<Target> {
    fn project(self) -> Target;
}

impl<S, T> Project<Vec<T>> for Vec<S>
where
    S: Project<T>,
{
    fn project(self) -> Vec<T> {
        self.into_iter().map(<S as Project<T>>::project).collect()
    }
}

impl<S, T> Project<Option<T>> for Option<S>
where
    S: Project<T>,
{
    fn project(self) -> Option<T> {
        self.map(<S as Project<T>>::project)
    }
}
