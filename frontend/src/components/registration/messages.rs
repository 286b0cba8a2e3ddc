/// The form's typed event contract. Every UI event the registration
/// pipeline reacts to is one of these; validation, collection, and
/// formatting stay callback-free behind them.
#[derive(Clone)]
pub enum Msg {
    /// The program selector changed; drives the conditional sections.
    ProgramChanged(String),
    /// The submission-method radio group changed.
    ChannelChanged(String),
    /// The form was submitted.
    SubmitRequested,
}
