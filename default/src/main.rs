use apigw::{Context, Request, Response};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
struct Greeting {
    name: String,
}

#[derive(Serialize)]
struct Greeted {
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let handler = apigw::handler(greet);
    // The runtime hands us the event as a Value; feed its bytes through the
    // wrapped handler and hand the encoded response back the same way.
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let invocation =
            serde_json::to_vec(&event.payload).map(|input| handler(input, event.context));
        async move {
            let output = invocation?.await?;
            Ok::<Value, Error>(serde_json::from_slice(&output)?)
        }
    }))
    .await
}

async fn greet(request: Request, _: Context) -> Result<Response, Error> {
    let greeting: Greeting = request.payload()?;
    log::info!("greeting {} on {}", greeting.name, request.path);
    let body = Greeted {
        message: format!("hello, {}", greeting.name),
    };
    Ok(Response::json(200, None, &body)?)
}
