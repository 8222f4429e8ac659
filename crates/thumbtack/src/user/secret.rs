use crate::context::Context;
use crate::prelude::{println, *};
use thumbtack_core::ApiResult;

#[derive(Debug, clap::Args, Clone)]
pub struct SecretOptions {}

pub fn secret_data(ctx: &Context) -> Result<ApiResult> {
    ctx.call("user secret", |client| client.user_secret())
}

pub fn run(_options: SecretOptions, ctx: &Context) -> Result<()> {
    let result = secret_data(ctx)?;

    if ctx.json {
        return print_json(&result);
    }

    println!("{}", result.result.unwrap_or_default());
    Ok(())
}
