use super::Context;
use crate::selector::{can_prompt, select_service};
use anyhow::Result;
use stackview_cli::report::{render_aliases, render_overview, render_service};
use stackview_core::{
    require_service, resolve_route, Navigation, ServiceRoute, StackKey, StackOverview,
};

/// Print a service page, or the stack overview when the service is missing
pub async fn show(ctx: &Context, key: StackKey, service: Option<String>, reveal: bool) -> Result<()> {
    let stack = ctx.store.get(&key).await?;
    let overview = StackOverview::from_stack(&stack);

    let service = match service {
        Some(service) => service,
        None if can_prompt() && !overview.is_empty() => select_service(&overview)?,
        None => {
            println!("{}", render_overview(&key, &overview));
            return Ok(());
        }
    };

    let route = ServiceRoute::new(key, service);
    match resolve_route(&stack, &route, ctx.internal_domain()) {
        Navigation::Service(details) => {
            println!(
                "{}",
                render_service(&details, reveal, &ctx.config.display.secret_mask)
            );
        }
        Navigation::Redirect(stack_key) => {
            println!("{}", render_overview(&stack_key, &overview));
        }
    }
    Ok(())
}

/// Print a service's environment in `.env` format
pub async fn env(ctx: &Context, key: StackKey, service: String) -> Result<()> {
    let stack = ctx.store.get(&key).await?;
    let details = require_service(&stack, &ServiceRoute::new(key, service), ctx.internal_domain())?;

    let dotenv = details.dotenv();
    if !dotenv.is_empty() {
        println!("{}", dotenv);
    }
    Ok(())
}

/// Print a service's network and global aliases
pub async fn aliases(ctx: &Context, key: StackKey, service: String, full: bool) -> Result<()> {
    let stack = ctx.store.get(&key).await?;
    let details = require_service(&stack, &ServiceRoute::new(key, service), ctx.internal_domain())?;

    println!("{}", render_aliases(&details, full));
    Ok(())
}

/// Open the interactive viewer on a stack
pub async fn tui(ctx: Context, key: StackKey, service: Option<String>) -> Result<()> {
    stackview_tui::run(ctx.store, ctx.config, key, service).await?;
    Ok(())
}
