use yew::prelude::*;
use yew_router::prelude::Link;

use super::{breadcrumb, with_sidebar};
use crate::{
    components::{
        icons::{Icon, IconName},
        raw_html::RichContent,
    },
    router::Route,
    seo::apply_page_meta,
};

/// Static pages that ship with the site.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InfoKind {
    About,
    Contact,
    PrivacyPolicy,
    TermsOfService,
    NewsletterSuccess,
}

impl InfoKind {
    fn title(self) -> &'static str {
        match self {
            InfoKind::About => "About Us",
            InfoKind::Contact => "Contact Us",
            InfoKind::PrivacyPolicy => "Privacy Policy",
            InfoKind::TermsOfService => "Terms of Service",
            InfoKind::NewsletterSuccess => "Subscription Confirmed",
        }
    }
}

const ABOUT_BODY: &str = "\
OmegaNews is a premier digital news publication dedicated to delivering accurate, unbiased, and \
thought-provoking journalism from around the globe.

Founded in 2010, our mission has always been to empower our readers with the information they need \
to make sense of a complex world.

### Our Mission

To provide fearless, independent reporting that holds power to account and gives voice to the \
voiceless. We are committed to the highest standards of journalistic integrity and transparency.

### Our Team

Our newsroom consists of award-winning journalists, editors, and photographers who are passionate \
about their craft. From breaking news to in-depth investigations, our team works around the clock \
to bring you the stories that matter.
";

const PRIVACY_BODY: &str = "\
*Last updated: October 26, 2023*

At OmegaNews, one of our main priorities is the privacy of our visitors. This Privacy Policy \
document contains types of information that is collected and recorded by OmegaNews and how we use it.

### Information We Collect

The personal information that you are asked to provide, and the reasons why you are asked to \
provide it, will be made clear to you at the point we ask you to provide your personal information.

### How We Use Your Information

We use the information we collect in various ways, including to:

- Provide, operate, and maintain our website
- Improve, personalize, and expand our website
- Understand and analyze how you use our website
- Develop new products, services, features, and functionality

### Log Files

OmegaNews follows a standard procedure of using log files. The information collected by log files \
include internet protocol (IP) addresses, browser type, Internet Service Provider (ISP), date and \
time stamp, referring/exit pages, and possibly the number of clicks.
";

const TERMS_BODY: &str = "\
*Last updated: October 26, 2023*

Please read these terms of service carefully before using OmegaNews website operated by OmegaNews.

### Conditions of Use

By using this website, you certify that you have read and reviewed this Agreement and that you \
agree to comply with its terms.

### Intellectual Property

You agree that all materials, products, and services provided on this website are the property of \
OmegaNews, its affiliates, directors, officers, employees, agents, suppliers, or licensors.

### User Accounts

As a user of this website, you may be asked to register with us and provide private information. \
You are responsible for ensuring the accuracy of this information.
";

#[derive(Properties, PartialEq)]
pub struct InfoPageProps {
    pub kind: InfoKind,
}

#[function_component(InfoPage)]
pub fn info_page(props: &InfoPageProps) -> Html {
    use_effect_with(props.kind, |kind| {
        apply_page_meta(kind.title(), None);
        || ()
    });

    match props.kind {
        InfoKind::About => text_page("About OmegaNews", InfoKind::About, ABOUT_BODY),
        InfoKind::PrivacyPolicy => text_page("Privacy Policy", InfoKind::PrivacyPolicy, PRIVACY_BODY),
        InfoKind::TermsOfService => text_page("Terms of Service", InfoKind::TermsOfService, TERMS_BODY),
        InfoKind::Contact => html! { <ContactPage /> },
        InfoKind::NewsletterSuccess => newsletter_success(),
    }
}

fn text_page(heading: &str, kind: InfoKind, body: &'static str) -> Html {
    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb(kind.title()) }
            { with_sidebar(html! {
                <>
                    <h1 class="mb-6 font-serif text-4xl font-black md:text-5xl">{ heading.to_string() }</h1>
                    <RichContent content={body} class={classes!("prose-lg")} />
                </>
            }) }
        </div>
    }
}

fn newsletter_success() -> Html {
    html! {
        <div class="container mx-auto flex min-h-[60vh] items-center justify-center px-4">
            <div class="max-w-lg rounded-lg border border-[var(--border)] bg-[var(--surface-alt)] p-10 text-center shadow-sm">
                <div class="mb-6 flex justify-center text-green-500">
                    <Icon name={IconName::Check} size={64} />
                </div>
                <h1 class="mb-4 font-serif text-3xl font-black">{ "Subscription Confirmed!" }</h1>
                <p class="mb-8 leading-relaxed text-[var(--muted)]">
                    { "Thank you for subscribing to the OmegaNews newsletter. You will now receive the latest headlines, in-depth analysis, and exclusive updates directly in your inbox." }
                </p>
                <Link<Route> to={Route::Home} classes={classes!("inline-block", "rounded", "bg-slate-900", "px-8", "py-3", "text-xs", "font-bold", "uppercase", "tracking-wider", "text-white", "hover:bg-[var(--primary)]")}>
                    { "Return to Home" }
                </Link<Route>>
                <div class="mt-4">
                    <Link<Route> to={Route::LatestNews} classes={classes!("inline-flex", "items-center", "gap-1", "text-sm", "font-bold", "text-[var(--muted)]", "hover:text-[var(--primary)]")}>
                        { "Read Latest News" }
                        <Icon name={IconName::ChevronRight} size={14} />
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(ContactPage)]
fn contact_page() -> Html {
    let sent = use_state(|| false);

    let on_submit = {
        let sent = sent.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            sent.set(true);
        })
    };
    let send_another = {
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| sent.set(false))
    };

    let label = "mb-2 block text-xs font-bold uppercase text-[var(--muted)]";
    let field = "w-full rounded border border-[var(--border)] bg-[var(--surface-alt)] p-3 focus:border-[var(--primary)] focus:bg-[var(--surface)] focus:outline-none";

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb("Contact Us") }
            <div class="mb-10">
                <h1 class="mb-4 font-serif text-4xl font-black md:text-5xl">{ "Get in Touch" }</h1>
                <p class="max-w-2xl text-lg text-[var(--muted)]">
                    { "Have a story tip, a question, or just want to say hello? We'd love to hear from you." }
                </p>
            </div>
            <div class="grid grid-cols-1 gap-10 lg:grid-cols-12">
                <div class="lg:col-span-8">
                    if *sent {
                        <div class="rounded border border-green-200 bg-green-50 p-8 text-center text-green-800">
                            <h3 class="mb-2 text-2xl font-bold">{ "Message Sent!" }</h3>
                            <p>{ "Thank you for reaching out. We will get back to you as soon as possible." }</p>
                            <button type="button" class="mt-4 text-sm font-bold underline" onclick={send_another}>
                                { "Send another message" }
                            </button>
                        </div>
                    } else {
                        <form class="space-y-6" onsubmit={on_submit}>
                            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                                <div>
                                    <label class={label}>{ "Name" }</label>
                                    <input type="text" class={field} required=true />
                                </div>
                                <div>
                                    <label class={label}>{ "Email" }</label>
                                    <input type="email" class={field} required=true />
                                </div>
                            </div>
                            <div>
                                <label class={label}>{ "Subject" }</label>
                                <input type="text" class={field} required=true />
                            </div>
                            <div>
                                <label class={label}>{ "Message" }</label>
                                <textarea rows="6" class={field} required=true />
                            </div>
                            <button type="submit" class="inline-flex items-center gap-2 rounded bg-slate-900 px-8 py-4 text-xs font-bold uppercase text-white hover:bg-[var(--primary)]">
                                { "Send Message" }
                                <Icon name={IconName::Mail} size={16} />
                            </button>
                        </form>
                    }
                </div>
                <div class="space-y-8 lg:col-span-4">
                    <div class="border border-[var(--border)] bg-[var(--surface-alt)] p-8">
                        <h3 class="mb-6 font-serif text-xl font-bold">{ "Contact Info" }</h3>
                        <ul class="space-y-4 text-sm text-[var(--muted)]">
                            <li>{ "123 News Avenue, Suite 400, New York, NY 10001, USA" }</li>
                            <li>{ "+1 (555) 123-4567" }</li>
                            <li>{ "contact@omeganews.com" }</li>
                        </ul>
                    </div>
                    <div class="bg-slate-900 p-8 text-white">
                        <h3 class="mb-4 font-serif text-xl font-bold">{ "Work With Us" }</h3>
                        <p class="mb-4 text-sm text-gray-400">{ "We are always looking for talented writers and photographers." }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
