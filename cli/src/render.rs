//! Plain-text rendering of the active screen.

use petstore_core::view::{ActiveView, CategoryOverlay};
use petstore_core::{App, CategoryListView, Pet, PetForm, PetFormMode, PetListView, PetStatus, Screen};

pub fn render_app(app: &App) -> String {
    let nav = match app.screen() {
        Screen::Pets => "[pets]  categories",
        Screen::Categories => "pets  [categories]",
    };
    let body = match app.active() {
        ActiveView::Pets(view) => render_pets(view),
        ActiveView::Categories(view) => render_categories(view),
    };
    format!("== Petstore ==  {nav}\n{body}")
}

fn pets_title(filter: Option<PetStatus>) -> &'static str {
    match filter {
        Some(PetStatus::Available) => "Available Pets",
        Some(PetStatus::Pending) => "Pending Pets",
        Some(PetStatus::Sold) => "Sold Pets",
        None => "All Pets",
    }
}

pub fn render_pets(view: &PetListView) -> String {
    let mut lines = Vec::new();
    if view.is_loading() {
        lines.push("Loading pets...".to_string());
    } else if let Some(error) = view.error() {
        lines.push(format!("error: {error}"));
    } else {
        lines.push(pets_title(view.filter()).to_string());
        if view.items().is_empty() {
            lines.push("No pets available".to_string());
        }
        lines.extend(view.items().iter().flat_map(pet_lines));
    }
    if let Some(form) = view.overlay() {
        lines.extend(pet_form_lines(form));
    }
    lines.join("\n")
}

fn pet_lines(pet: &Pet) -> Vec<String> {
    let status = pet.status.map(|s| s.as_str()).unwrap_or("unknown");
    let mut lines = vec![format!("#{} {} [{status}]", pet.id, pet.name)];
    if let Some(category) = &pet.category {
        lines.push(format!("    Category: {}", category.name));
    }
    for url in &pet.photo_urls {
        lines.push(format!("    Photo: {url}"));
    }
    if let Some(tags) = pet.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        lines.push(format!("    Tags: {}", names.join(", ")));
    }
    lines
}

fn pet_form_lines(form: &PetForm) -> Vec<String> {
    let draft = form.draft();
    let mut lines = vec![match form.mode() {
        PetFormMode::Edit { id } => format!("-- Edit Pet #{id} --"),
        PetFormMode::Add => "-- Add Pet --".to_string(),
    }];
    lines.push(format!("  Name: {}", draft.name()));
    let category = draft.category().map(|c| c.name.as_str()).unwrap_or("(none)");
    lines.push(format!("  Category: {category}"));
    if !form.categories().is_empty() {
        let options: Vec<String> = form.categories().iter().map(|c| format!("{}={}", c.id, c.name)).collect();
        lines.push(format!("    options: {}", options.join(", ")));
    }
    let status = draft.status().map(|s| s.as_str()).unwrap_or("(none)");
    lines.push(format!("  Status: {status}"));
    lines.push("  Photo URLs:".to_string());
    for (index, url) in draft.photo_urls().iter().enumerate() {
        lines.push(format!("    [{index}] {url}"));
    }
    if form.is_submitting() {
        let pending = match form.mode() {
            PetFormMode::Edit { .. } => "  Updating...",
            PetFormMode::Add => "  Adding...",
        };
        lines.push(pending.to_string());
    }
    if let Some(error) = form.error() {
        lines.push(format!("  error: {error}"));
    }
    lines
}

pub fn render_categories(view: &CategoryListView) -> String {
    let mut lines = Vec::new();
    if view.is_loading() {
        lines.push("Loading categories...".to_string());
    } else if let Some(error) = view.error() {
        lines.push(format!("error: {error}"));
    } else {
        lines.push("Categories".to_string());
        if view.items().is_empty() {
            lines.push("No categories available".to_string());
        }
        lines.extend(view.items().iter().map(|c| format!("#{} {}", c.id, c.name)));
    }
    if let Some(overlay) = view.overlay() {
        let title = match overlay {
            CategoryOverlay::Edit(form) => format!("-- Edit Category #{} --", form.category_id()),
            CategoryOverlay::Add(_) => "-- Add New Category --".to_string(),
        };
        lines.push(title);
        lines.push(format!("  Name: {}", overlay.name()));
        if let Some(error) = overlay.error() {
            lines.push(format!("  error: {error}"));
        }
    }
    lines.join("\n")
}
