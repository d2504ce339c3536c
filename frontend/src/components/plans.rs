use leptos::*;
use robotech::content::{ADD_ONS, PLANS};
use robotech::{BillingPeriod, PlanSelector, PlanTier};

use super::{FadeIn, SectionHeading};

fn billing_button(selector: RwSignal<PlanSelector>, period: BillingPeriod) -> impl IntoView {
    let active = move || selector.with(|s| s.billing_period() == period);
    view! {
        <button
            class="billing-option"
            class:active=active
            aria-pressed=move || active().to_string()
            on:click=move |_| {
                log::debug!("Billing period: {}", period.label());
                selector.update(|s| s.set_billing_period(period));
            }
        >
            {period.label()}
            {(period == BillingPeriod::Yearly).then(|| view! { <span class="save-badge">"Save 20%"</span> })}
        </button>
    }
}

fn plan_card(
    selector: RwSignal<PlanSelector>,
    index: usize,
    plan: &'static PlanTier,
) -> impl IntoView {
    let price = create_memo(move |_| selector.with(|s| s.price(plan)));

    view! {
        <FadeIn index=index>
            <div
                class="plan-card"
                class:popular=plan.popular
                class:selected=move || selector.with(|s| s.is_selected(index))
                class:dimmed=move || selector.with(|s| s.is_dimmed(index))
                on:mouseenter=move |_| selector.update(|s| s.hover(Some(index)))
                on:mouseleave=move |_| selector.update(|s| s.hover(None))
                on:click=move |_| selector.update(|s| s.select_plan(index))
            >
                {plan.popular.then(|| view! { <span class="popular-badge">"✨ Most Popular"</span> })}
                <Show when=move || selector.with(|s| s.is_selected(index))>
                    <span class="selected-check" aria-label="Selected plan">"✓"</span>
                </Show>

                <h3>{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>

                <div class="plan-price">
                    <span class="price-amount">"$" {move || price.get().amount}</span>
                    <span class="price-suffix">"/" {move || price.get().suffix}</span>
                    {move || {
                        price
                            .get()
                            .per_month
                            .map(|monthly| {
                                view! {
                                    <p class="price-note">
                                        {format!("${} per month, billed annually", monthly)}
                                    </p>
                                }
                            })
                    }}
                </div>

                <button class="btn btn-block" class:btn-primary=plan.popular>
                    {plan.cta}
                </button>

                <ul class="plan-features">
                    {plan
                        .features
                        .iter()
                        .map(|feature| view! { <li><span class="check">"✓"</span>{*feature}</li> })
                        .collect_view()}
                </ul>
            </div>
        </FadeIn>
    }
}

/// Plan cards with a monthly/yearly toggle and optional add-ons.
#[component]
pub fn RentalPlans() -> impl IntoView {
    let selector = create_rw_signal(PlanSelector::new(PLANS));

    view! {
        <section id="rental-plans" class="section">
            <div class="container">
                <SectionHeading
                    lead="Choose your"
                    highlight="rental plan"
                    subtitle="Flexible plans that grow with your needs. Start small, scale up anytime."
                />

                <div class="billing-toggle" role="group" aria-label="Billing period">
                    {billing_button(selector, BillingPeriod::Monthly)}
                    {billing_button(selector, BillingPeriod::Yearly)}
                </div>

                <div class="plan-grid">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| plan_card(selector, index, plan))
                        .collect_view()}
                </div>

                <FadeIn class="add-ons" index=PLANS.len()>
                    <h3>"Popular Add-ons"</h3>
                    <p class="muted">"Enhance your robot experience with these optional upgrades"</p>
                    <div class="add-on-grid">
                        {ADD_ONS
                            .iter()
                            .map(|addon| {
                                view! {
                                    <div class="add-on">
                                        <div class="add-on-header">
                                            <h4>{addon.name}</h4>
                                            <span class="add-on-price">{addon.price}</span>
                                        </div>
                                        <p>{addon.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </FadeIn>

                <FadeIn class="section-cta" index={PLANS.len() + 1}>
                    <p class="muted">"Need help choosing the right plan?"</p>
                    <a href="#faq" class="link-button">"Talk to our robot experts →"</a>
                </FadeIn>
            </div>
        </section>
    }
}
