//! Add/edit state machine around a [`ProductForm`].

use super::validator::{FieldErrors, ProductForm};
use crate::clients::ProductClient;
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::product_actor::ProductError;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(Product),
}

/// The remote call a submit turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(ProductDraft),
    Update(ProductId, ProductPatch),
}

impl Mutation {
    pub async fn send(self, client: &ProductClient) -> Result<Submitted, ProductError> {
        match self {
            Mutation::Create(draft) => client.create_product(draft).await.map(Submitted::Created),
            Mutation::Update(id, patch) => client
                .update_product(id, patch)
                .await
                .map(Submitted::Updated),
        }
    }
}

/// A mutation that resolved successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(Product),
    Updated(Product),
}

impl Submitted {
    pub fn product(&self) -> &Product {
        match self {
            Submitted::Created(p) | Submitted::Updated(p) => p,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error(transparent)]
    Remote(#[from] ProductError),

    #[error("A submission is already in flight")]
    InFlight,
}

/// Owns the form inputs, the add/edit mode and the in-flight flag.
///
/// A submit is split in two so the caller can await the remote call without holding
/// the editor: [`prepare`](Self::prepare) validates and marks the editor busy,
/// [`complete`](Self::complete) records the outcome. [`submit`](Self::submit) does both.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    form: ProductForm,
    mode: EditMode,
    submitting: bool,
    field_errors: FieldErrors,
    remote_error: Option<ProductError>,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        match &self.mode {
            EditMode::Editing(p) => Some(p.id),
            EditMode::Creating => None,
        }
    }

    /// While true the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn remote_error(&self) -> Option<&ProductError> {
        self.remote_error.as_ref()
    }

    /// "Add" or "Update".
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditMode::Creating => "Add",
            EditMode::Editing(_) => "Update",
        }
    }

    pub fn begin_edit(&mut self, product: Product) {
        debug!(id = %product.id, "Begin edit");
        self.form = ProductForm::from_product(&product);
        self.mode = EditMode::Editing(product);
        self.clear_errors();
    }

    pub fn cancel(&mut self) {
        self.form.clear();
        self.mode = EditMode::Creating;
        self.clear_errors();
    }

    /// Validates the inputs and returns the mutation to send.
    ///
    /// Invalid input never reaches the remote. On success the editor stays busy until
    /// [`complete`](Self::complete) is called.
    pub fn prepare(&mut self) -> Result<Mutation, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(%errors, "Validation failed");
                self.field_errors = errors.clone();
                return Err(SubmitError::Validation(errors));
            }
        };
        self.clear_errors();
        self.submitting = true;

        Ok(match &self.mode {
            EditMode::Creating => Mutation::Create(draft),
            EditMode::Editing(product) => Mutation::Update(product.id, ProductPatch::from(draft)),
        })
    }

    /// Records how the prepared mutation resolved.
    ///
    /// Success clears the form and leaves edit mode. A failure keeps the entered data
    /// so the user can retry or cancel.
    pub fn complete(
        &mut self,
        result: Result<Submitted, ProductError>,
    ) -> Result<Submitted, SubmitError> {
        self.submitting = false;
        match result {
            Ok(submitted) => {
                info!(id = %submitted.product().id, "Submitted");
                self.form.clear();
                self.mode = EditMode::Creating;
                Ok(submitted)
            }
            Err(e) => {
                warn!(error = %e, "Submit failed");
                self.remote_error = Some(e.clone());
                Err(SubmitError::Remote(e))
            }
        }
    }

    pub async fn submit(&mut self, client: &ProductClient) -> Result<Submitted, SubmitError> {
        let mutation = self.prepare()?;
        let result = mutation.send(client).await;
        self.complete(result)
    }

    fn clear_errors(&mut self) {
        self.field_errors = FieldErrors::default();
        self.remote_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::framework::FrameworkError;
    use crate::framework::mock::{MockClient, create_mock_client, expect_create};
    use rust_decimal::Decimal;

    fn pen(id: u64) -> Product {
        Product::new(ProductId(id), "Pen", Decimal::from(10), 100)
    }

    #[tokio::test]
    async fn create_clears_form_on_success() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create().return_ok(pen(1));
        let client = ProductClient::new(mock.client());

        let mut editor = ProductEditor::new();
        *editor.form_mut() = ProductForm::new("Pen", "10", "100");

        let submitted = editor.submit(&client).await.unwrap();
        assert_eq!(submitted, Submitted::Created(pen(1)));
        assert_eq!(editor.form(), &ProductForm::default());
        assert!(!editor.is_submitting());
        mock.verify();
    }

    #[tokio::test]
    async fn invalid_input_sends_nothing() {
        let mock = MockClient::<Product>::new();
        let client = ProductClient::new(mock.client());

        let mut editor = ProductEditor::new();
        editor.form_mut().set(Field::Name, "Pen");

        let result = editor.submit(&client).await;
        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert!(editor.field_errors().get(Field::Price).is_some());
        assert!(!editor.is_submitting());
        // No expectation was registered, so any request would have failed the mock.
        mock.verify();
    }

    #[tokio::test]
    async fn edit_sends_full_patch_for_existing_id() {
        let mut mock = MockClient::<Product>::new();
        let mut repriced = pen(7);
        repriced.price = Decimal::from(15);
        mock.expect_update(ProductId(7)).return_ok(repriced.clone());
        let client = ProductClient::new(mock.client());

        let mut editor = ProductEditor::new();
        editor.begin_edit(pen(7));
        assert_eq!(editor.submit_label(), "Update");
        assert_eq!(editor.form().price, "10");
        editor.form_mut().set(Field::Price, "15");

        let mutation = editor.prepare().unwrap();
        assert_eq!(
            mutation,
            Mutation::Update(
                ProductId(7),
                ProductPatch::default()
                    .name("Pen")
                    .price(Decimal::from(15))
                    .stock(100)
            )
        );
        let result = mutation.send(&client).await;
        let submitted = editor.complete(result).unwrap();

        assert_eq!(submitted, Submitted::Updated(repriced));
        assert_eq!(editor.mode(), &EditMode::Creating);
        mock.verify();
    }

    #[tokio::test]
    async fn remote_failure_keeps_entered_data() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update(ProductId(3))
            .return_err(FrameworkError::NotFound(ProductId(3).to_string()));
        let client = ProductClient::new(mock.client());

        let mut editor = ProductEditor::new();
        editor.begin_edit(pen(3));
        editor.form_mut().set(Field::Stock, "42");

        let result = editor.submit(&client).await;
        assert_eq!(
            result,
            Err(SubmitError::Remote(ProductError::NotFound(
                "product_3".to_string()
            )))
        );
        assert_eq!(editor.form().stock, "42");
        assert_eq!(editor.editing_id(), Some(ProductId(3)));
        assert!(editor.remote_error().is_some());
        mock.verify();
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let mut editor = ProductEditor::new();
        *editor.form_mut() = ProductForm::new("Pen", "10", "100");

        let mutation = editor.prepare().unwrap();
        assert!(editor.is_submitting());
        assert_eq!(editor.prepare(), Err(SubmitError::InFlight));

        let pending = tokio::spawn(async move { mutation.send(&client).await });
        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder.send(Ok(pen(1))).unwrap();

        editor.complete(pending.await.unwrap()).unwrap();
        assert!(!editor.is_submitting());
    }

    #[test]
    fn cancel_resets_and_exits_edit_mode() {
        let mut editor = ProductEditor::new();
        editor.begin_edit(pen(5));
        editor.cancel();

        assert_eq!(editor.mode(), &EditMode::Creating);
        assert_eq!(editor.form(), &ProductForm::default());
        assert_eq!(editor.submit_label(), "Add");
    }
}
