//! View rendering for the registration form.
//!
//! The inputs are uncontrolled; ids and group names must stay in step
//! with the field registry, which is what the snapshot reader and the
//! error highlighting resolve against.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::registration::dispatch::Channel;
use common::site;

use super::messages::Msg;
use super::state::RegistrationFormComponent;

const SESSION_OPTIONS: [&str; 2] = ["Afternoon Session (Mon-Fri)", "Saturday Session"];

const SUBJECT_OPTIONS: [&str; 10] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Accounting",
    "Economics",
    "Business Studies",
    "Geography",
    "History",
];

const GENDERS: [&str; 2] = ["Male", "Female"];
const RELATIONSHIPS: [&str; 4] = ["Mother", "Father", "Legal Guardian", "Other"];
const GRADES: [&str; 6] = [
    "Grade 7",
    "Grade 8",
    "Grade 9",
    "Grade 10",
    "Grade 11",
    "Grade 12",
];

pub fn view(component: &RegistrationFormComponent, ctx: &Context<RegistrationFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section id="registration" class="registration">
            <h2>{ "Online Registration" }</h2>
            <form
                id="registrationForm"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::SubmitRequested
                })}
            >
                { program_section(link) }
                { personal_section() }
                { parent_section() }
                { previous_school_section() }
                { session_section(component) }
                { subjects_section(component) }
                { accommodation_section() }
                { additional_info_section() }
                { submission_section(component, link) }
            </form>
        </section>
    }
}

fn program_section(link: &Scope<RegistrationFormComponent>) -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Program" }</legend>
            <div class="form-group">
                <label for="program">{ "Program Applying For" }{ required_mark() }</label>
                <select
                    id="program"
                    name="program"
                    required={true}
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::ProgramChanged(select.value())
                    })}
                >
                    <option value="" selected={true} disabled={true}>{ "Select a program" }</option>
                    {
                        site::PROGRAMS.iter().map(|&program| html! {
                            <option value={program}>{ program }</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
        </fieldset>
    }
}

fn personal_section() -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Personal Details" }</legend>
            { text_field("fullName", "Full Name", "text", true) }
            { text_field("idNumber", "ID / Birth Certificate Number", "text", true) }
            { date_of_birth_group() }
            { select_field("gender", "Gender", "Select gender", &GENDERS, true) }
            { text_field("phone", "Phone Number", "tel", true) }
            { text_field("email", "Email Address", "email", true) }
        </fieldset>
    }
}

fn date_of_birth_group() -> Html {
    html! {
        <div class="form-group">
            <label for="dobDay">{ "Date of Birth" }</label>
            <div class="dob-row">
                <select id="dobDay" name="dobDay">
                    <option value="" selected={true} disabled={true}>{ "Day" }</option>
                    {
                        (1..=31).map(|day| html! {
                            <option value={format!("{day:02}")}>{ day }</option>
                        }).collect::<Html>()
                    }
                </select>
                <select id="dobMonth" name="dobMonth">
                    <option value="" selected={true} disabled={true}>{ "Month" }</option>
                    {
                        (1..=12).map(|month| html! {
                            <option value={format!("{month:02}")}>
                                { site::month_name(month).unwrap_or("") }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
                <select id="dobYear" name="dobYear">
                    <option value="" selected={true} disabled={true}>{ "Year" }</option>
                    {
                        (site::DOB_YEAR_MIN..=site::DOB_YEAR_MAX).rev().map(|year| html! {
                            <option value={year.to_string()}>{ year }</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
        </div>
    }
}

fn parent_section() -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Parent / Guardian Details" }</legend>
            { text_field("parentName", "Full Name", "text", true) }
            { select_field("relationship", "Relationship to Learner", "Select relationship", &RELATIONSHIPS, true) }
            { text_field("parentPhone", "Phone Number", "tel", true) }
            { text_field("parentEmail", "Email Address (optional)", "email", false) }
        </fieldset>
    }
}

fn previous_school_section() -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Previous School" }</legend>
            { text_field("previousSchool", "School Name (optional)", "text", false) }
            { select_field("gradeCompleted", "Last Grade Completed (optional)", "Select grade", &GRADES, false) }
        </fieldset>
    }
}

fn session_section(component: &RegistrationFormComponent) -> Html {
    html! {
        <fieldset id="sessionSection" class="form-section" style={display(component.tutorial_mode)}>
            <legend>{ "Session Preference" }</legend>
            {
                SESSION_OPTIONS.iter().map(|&session| html! {
                    <label class="checkbox-label">
                        <input type="radio" name="session" value={session} />
                        <span class="checkbox-custom"></span>
                        { session }
                    </label>
                }).collect::<Html>()
            }
        </fieldset>
    }
}

fn subjects_section(component: &RegistrationFormComponent) -> Html {
    html! {
        <fieldset id="subjectsSection" class="form-section" style={display(component.tutorial_mode)}>
            <legend>{ "Subjects Registering For" }</legend>
            <div class="subject-grid">
                {
                    SUBJECT_OPTIONS.iter().map(|&subject| html! {
                        <label class="checkbox-label">
                            <input type="checkbox" name="subjects" value={subject} />
                            <span class="checkbox-custom"></span>
                            { subject }
                        </label>
                    }).collect::<Html>()
                }
            </div>
        </fieldset>
    }
}

fn accommodation_section() -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Accommodation" }</legend>
            <label class="checkbox-label">
                <input type="checkbox" id="hostel" name="hostel" />
                <span class="checkbox-custom"></span>
                { "Hostel accommodation required" }
            </label>
        </fieldset>
    }
}

fn additional_info_section() -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ "Additional Information" }</legend>
            <div class="form-group">
                <label for="additionalInfo">{ "Anything else we should know? (optional)" }</label>
                <textarea id="additionalInfo" name="additionalInfo" rows={4}></textarea>
            </div>
        </fieldset>
    }
}

fn submission_section(
    component: &RegistrationFormComponent,
    link: &Scope<RegistrationFormComponent>,
) -> Html {
    let on_channel_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ChannelChanged(input.value())
    });

    let (mode_class, submit_text) = match component.channel {
        Channel::WhatsApp => ("whatsapp-mode", "Submit via WhatsApp"),
        Channel::Email => ("email-mode", "Submit via Email"),
    };

    html! {
        <fieldset class="form-section">
            <legend>{ "Submit Registration Via" }</legend>
            <label class="checkbox-label">
                <input
                    type="radio"
                    name="submissionMethod"
                    value="whatsapp"
                    checked={component.channel == Channel::WhatsApp}
                    onchange={on_channel_change.clone()}
                />
                <span class="checkbox-custom"></span>
                { "WhatsApp" }
            </label>
            <label class="checkbox-label">
                <input
                    type="radio"
                    name="submissionMethod"
                    value="email"
                    checked={component.channel == Channel::Email}
                    onchange={on_channel_change}
                />
                <span class="checkbox-custom"></span>
                { "Email" }
            </label>
            <button type="submit" id="submitBtn" class={classes!("submit-btn", mode_class)}>
                { submit_text }
            </button>
        </fieldset>
    }
}

fn text_field(id: &'static str, label: &str, input_type: &'static str, required: bool) -> Html {
    html! {
        <div class="form-group">
            <label for={id}>
                { label }
                { if required { required_mark() } else { html!{} } }
            </label>
            <input type={input_type} id={id} name={id} required={required} />
        </div>
    }
}

fn select_field(
    id: &'static str,
    label: &str,
    placeholder: &str,
    options: &[&'static str],
    required: bool,
) -> Html {
    html! {
        <div class="form-group">
            <label for={id}>
                { label }
                { if required { required_mark() } else { html!{} } }
            </label>
            <select id={id} name={id} required={required}>
                <option value="" selected={true} disabled={true}>{ placeholder }</option>
                {
                    options.iter().map(|&option| html! {
                        <option value={option}>{ option }</option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

fn required_mark() -> Html {
    html! { <span class="required">{ "*" }</span> }
}

fn display(shown: bool) -> &'static str {
    if shown {
        "display: block;"
    } else {
        "display: none;"
    }
}
