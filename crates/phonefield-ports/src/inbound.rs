use crate::error::TransformationFailed;

/// Two-way conversion between the value a form is bound to and the value its
/// widgets display. `None` on either side means "no value".
pub trait DataTransformer: Send + Sync {
    type Model;
    type View;

    fn transform(&self, value: Option<&Self::Model>) -> Result<Self::View, TransformationFailed>;

    fn reverse_transform(
        &self,
        value: Option<&Self::View>,
    ) -> Result<Option<Self::Model>, TransformationFailed>;
}
