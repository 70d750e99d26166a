use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};

pub const TAG: &str = "Root";

pub fn router() -> ApiRouter<()> {
    ApiRouter::new()
        .api_route("/", routing::get_with(root, root_docs))
        .with_path_items(|op| op.tag(TAG))
}

async fn root() -> &'static str {
    "API is working properly"
}

fn root_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return a static message if the server is running.")
}
