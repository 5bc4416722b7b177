// SPDX-License-Identifier: Apache-2.0
//! Hand-rolled HTML pages for the form surface. Every user-supplied value
//! passes through [`escape_html`] before it reaches the page.

use rolodex_model::{Contact, ContactDraft, FieldError};

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        escape_html(title),
        body
    )
}

pub(crate) fn index_page(contacts: &[Contact]) -> String {
    let mut rows = String::new();
    for c in contacts {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><a href=\"/update/{}\">Edit</a> <a href=\"/delete/{}\">Delete</a></td></tr>",
            escape_html(&c.name),
            escape_html(&c.phone),
            escape_html(&c.email),
            escape_html(&c.kind),
            c.id,
            c.id
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No contacts yet.</td></tr>");
    }
    let body = format!(
        "<h1>Contacts</h1><p><a href=\"/add\">Add contact</a></p>\
<table><tr><th>Name</th><th>Phone</th><th>Email</th><th>Type</th><th></th></tr>{rows}</table>"
    );
    page_shell("Contacts", &body)
}

pub(crate) enum FormAction {
    Add,
    Update(i64),
}

pub(crate) fn contact_form_page(
    action: &FormAction,
    draft: &ContactDraft,
    errors: &[FieldError],
) -> String {
    let (title, post_to, submit) = match action {
        FormAction::Add => ("Add Contact", "/add".to_string(), "Add"),
        FormAction::Update(id) => ("Update Contact", format!("/update/{id}"), "Update"),
    };
    let mut error_list = String::new();
    if !errors.is_empty() {
        error_list.push_str("<ul class=\"errors\">");
        for e in errors {
            error_list.push_str(&format!(
                "<li>{} {}</li>",
                escape_html(e.field),
                escape_html(e.reason)
            ));
        }
        error_list.push_str("</ul>");
    }
    let body = format!(
        "<h1>{title}</h1>{error_list}\
<form method=\"post\" action=\"{post_to}\">\
<p><label>Name <input name=\"name\" value=\"{}\"></label></p>\
<p><label>Phone <input name=\"phone\" value=\"{}\"></label></p>\
<p><label>Email <input name=\"email\" value=\"{}\"></label></p>\
<p><label>Type <input name=\"type\" value=\"{}\"></label></p>\
<p><button type=\"submit\" name=\"submit\" value=\"{submit}\">{submit}</button></p>\
</form><p><a href=\"/\">Back to contacts</a></p>",
        escape_html(&draft.name),
        escape_html(&draft.phone),
        escape_html(&draft.email),
        escape_html(&draft.kind)
    );
    page_shell(title, &body)
}

pub(crate) fn not_found_page(id: i64) -> String {
    page_shell(
        "Contact Not Found",
        &format!("<h1>Contact not found</h1><p>No contact with id {id}.</p><p><a href=\"/\">Back to contacts</a></p>"),
    )
}

pub(crate) fn error_page() -> String {
    page_shell(
        "Server Error",
        "<h1>Something went wrong</h1><p><a href=\"/\">Back to contacts</a></p>",
    )
}
