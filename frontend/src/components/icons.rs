use yew::prelude::*;

/// Line icons drawn from Lucide (https://lucide.dev) path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,
    ArrowUp,
    ExternalLink,
    LogOut,

    // Content
    FileText,
    Folder,
    Image,
    MessageSquare,
    Users,
    Layout,
    Settings,
    Eye,
    Clock,

    // Actions
    Search,
    X,
    Menu,
    Plus,
    Pencil,
    Trash,
    Copy,
    Check,
    Heart,
    Bookmark,
    Share,
    Mail,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ArrowUp => "m18 15-6-6-6 6",
            IconName::ExternalLink => "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            IconName::LogOut => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9",

            IconName::FileText => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 \
                 17H8M10 9H8"
            },
            IconName::Folder => {
                "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 \
                 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2z"
            },
            IconName::Image => {
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM21 15l-5-5L5 \
                 21M8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z"
            },
            IconName::MessageSquare => "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            IconName::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 \
                 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },
            IconName::Layout => "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM3 9h18M9 21V9",
            IconName::Settings => {
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 \
                 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.73 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 \
                 0 0 0-2.73-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.43 \
                 14H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.17-2.73l-.06-.06a2 2 0 1 1 \
                 2.83-2.83l.06.06A1.65 1.65 0 0 0 10 3.43V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 \
                 2.73 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.57 10H21a2 2 0 1 \
                 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"
            },
            IconName::Eye => "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8zM12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            IconName::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",

            IconName::Search => "m21 21-6-6m2-5a7 7 0 1 1-14 0 7 7 0 0 1 14 0z",
            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::Plus => "M12 5v14M5 12h14",
            IconName::Pencil => "M17 3a2.85 2.85 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5z",
            IconName::Trash => "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
            IconName::Copy => {
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2zM4 16a2 2 \
                 0 0 1-2-2V4a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2"
            },
            IconName::Check => "M20 6 9 17l-5-5",
            IconName::Heart => {
                "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 \
                 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"
            },
            IconName::Bookmark => "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z",
            IconName::Share => {
                "M18 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM6 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM18 22a3 3 0 1 \
                 0 0-6 3 3 0 0 0 0 6zM8.59 13.51l6.83 3.98M15.41 6.51l-6.82 3.98"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"
            },
        }
    }

    /// Shapes that read better filled when toggled on.
    pub fn can_fill(&self) -> bool {
        matches!(self, IconName::Heart | IconName::Bookmark)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(20)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    /// Fill the shape with the stroke color.
    #[prop_or_default]
    pub filled: bool,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        filled,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if *filled && name.can_fill() { color.clone() } else { "none".to_string() };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                "transition-all",
                "duration-200",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Square icon button used in admin tables.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    #[prop_or(18)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub title: AttrValue,

    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        size,
        onclick,
        class,
        title,
        disabled,
    } = props;

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "w-9",
        "h-9",
        "rounded-lg",
        "text-[var(--muted)]",
        "transition-colors",
        "duration-100",
        "hover:bg-[var(--surface-alt)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-40",
        "disabled:cursor-not-allowed",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            disabled={*disabled}
            title={title.clone()}
            aria-label={title.clone()}
            type="button"
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
