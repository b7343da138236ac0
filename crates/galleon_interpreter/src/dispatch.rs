//! Verb executors and default verb logic.
//!
//! Parsing is deliberately simple: the line is split on whitespace, token 0
//! is resolved through the synonym table, and the remaining tokens are
//! rejoined with single spaces into one argument string. Object names are
//! themselves multi-word, so the argument is never re-split except by a
//! verb's own logic (the `use` verb splits on the literal `" with "`).

use tracing::debug;

use galleon_events::{MoveHookOutcome, UseLookup};
use galleon_foundation::{Direction, ObjectId, Response};
use galleon_world::ExitStatus;

use crate::continuation::{Continuation, ResumeAction};
use crate::grammar::{self, ResponseKind, Verb};
use crate::resolver::{self, Resolution, ResolvedRef, Scopes};
use crate::session::Session;

/// Parses and executes one line that is not consumed by a continuation.
pub(crate) fn run(session: &mut Session, line: &str) -> Response {
    let mut words = line.split_whitespace();
    let Some(verb_word) = words.next() else {
        return Response::text(String::new());
    };
    let args = words.collect::<Vec<_>>().join(" ");

    let verb_word = verb_word.to_lowercase();
    let Some(entry) = grammar::lookup(&verb_word) else {
        debug!(verb = %verb_word, "unknown command");
        return Response::error(format!("Unknown command \"{verb_word}\"!"));
    };

    debug!(verb = entry.canonical, args = %args, "dispatching");
    (entry.exec)(session, &args)
}

pub(crate) fn not_found(name: &str) -> Response {
    Response::error(format!("Cannot find \"{name}\"!"))
}

// Executors, one per grammar entry.

pub(crate) fn exec_examine(session: &mut Session, args: &str) -> Response {
    if args.is_empty() {
        return Response::text(session.world.player_room_info(true));
    }
    match resolver::resolve(args, Scopes::ALL, &session.world, &session.inventory) {
        Resolution::NotFound => not_found(args),
        Resolution::Found(target) => session.examine_object(&target),
        Resolution::Ambiguous(candidates) => {
            session.begin_disambiguation(candidates, ResumeAction::Examine)
        }
    }
}

pub(crate) fn exec_go(session: &mut Session, args: &str) -> Response {
    if args.is_empty() {
        return Response::text("Go where?");
    }
    let Some(direction) = Direction::parse(args) else {
        return Response::text("Cannot go in that direction!");
    };

    let room_id = session.world.player_room().clone();
    let hook_result = {
        let Session {
            world,
            inventory,
            hooks,
            ..
        } = session;
        hooks
            .move_hook(&room_id, direction)
            .map(|handler| handler(world, inventory))
    };

    match hook_result {
        Some(Some(MoveHookOutcome { replace: true, text })) => Response::text(text),
        Some(Some(MoveHookOutcome { replace: false, text })) => {
            let moved = default_move(session, direction);
            if text.is_empty() {
                moved
            } else {
                Response::text(format!("{text}\n{}", moved.message()))
            }
        }
        // No hook registered, or the hook deferred to default movement.
        _ => default_move(session, direction),
    }
}

fn default_move(session: &mut Session, direction: Direction) -> Response {
    let exit = match session
        .world
        .current_room()
        .and_then(|room| room.exit(direction))
    {
        Some(exit) => exit.clone(),
        None => return Response::text("Cannot go in that direction!"),
    };

    match exit.status {
        ExitStatus::Locked => Response::text(format!("The way {direction} is locked!")),
        ExitStatus::Jammed => Response::text(format!("The way {direction} is jammed!")),
        ExitStatus::Unlocked => {
            let first_visit = session
                .world
                .room(&exit.to)
                .is_some_and(|room| !room.visited());
            if session.world.move_player(direction) {
                Response::text(session.world.player_room_info(first_visit))
            } else {
                Response::text("Cannot go in that direction!")
            }
        }
    }
}

pub(crate) fn exec_take(session: &mut Session, args: &str) -> Response {
    if args.is_empty() {
        return Response::text("Take what?");
    }
    match resolver::resolve(args, Scopes::ROOM_ONLY, &session.world, &session.inventory) {
        Resolution::NotFound => not_found(args),
        Resolution::Found(target) => session.take_object(&target),
        Resolution::Ambiguous(candidates) => {
            session.begin_disambiguation(candidates, ResumeAction::Take)
        }
    }
}

pub(crate) fn exec_drop(session: &mut Session, args: &str) -> Response {
    if args.is_empty() {
        return Response::text("Drop what?");
    }
    match resolver::resolve(
        args,
        Scopes::INVENTORY_ONLY,
        &session.world,
        &session.inventory,
    ) {
        Resolution::NotFound => not_found(args),
        Resolution::Found(target) => session.drop_object(&target),
        Resolution::Ambiguous(candidates) => {
            session.begin_disambiguation(candidates, ResumeAction::Drop)
        }
    }
}

pub(crate) fn exec_inventory(session: &mut Session, _args: &str) -> Response {
    if session.inventory.is_empty() {
        return Response::text("Your inventory is empty!");
    }
    let mut text = String::from("Inventory:");
    for object in session.inventory.iter() {
        text.push_str("\n- ");
        text.push_str(object.name());
    }
    Response::text(text)
}

pub(crate) fn exec_use(session: &mut Session, args: &str) -> Response {
    if args.is_empty() {
        return Response::text("Use what?");
    }

    if let Some((use_phrase, with_phrase)) = args.split_once(" with ") {
        let with_phrase = with_phrase.to_string();
        return match resolver::resolve(use_phrase, Scopes::ALL, &session.world, &session.inventory)
        {
            Resolution::NotFound => not_found(use_phrase),
            Resolution::Found(first) => session.resume_second_object(first, &with_phrase),
            Resolution::Ambiguous(candidates) => session.begin_disambiguation(
                candidates,
                ResumeAction::UseWithPhrase {
                    phrase: with_phrase,
                },
            ),
        };
    }

    if let Some(use_phrase) = args.strip_suffix(" with") {
        // "use X with" and nothing after: ask for the second object.
        return match resolver::resolve(use_phrase, Scopes::ALL, &session.world, &session.inventory)
        {
            Resolution::NotFound => not_found(use_phrase),
            Resolution::Found(first) => session.await_second_object(first),
            Resolution::Ambiguous(candidates) => session.begin_disambiguation(
                candidates,
                ResumeAction::UseWithPhrase {
                    phrase: String::new(),
                },
            ),
        };
    }

    match resolver::resolve(args, Scopes::ALL, &session.world, &session.inventory) {
        Resolution::NotFound => not_found(args),
        Resolution::Found(target) => session.use_alone(&target),
        Resolution::Ambiguous(candidates) => {
            session.begin_disambiguation(candidates, ResumeAction::UseAlone)
        }
    }
}

pub(crate) fn exec_map(_session: &mut Session, _args: &str) -> Response {
    match grammar::entry(Verb::Map).kind {
        ResponseKind::Navigate(view) => Response::navigate(view),
        ResponseKind::Text => Response::text(String::new()),
    }
}

pub(crate) fn exec_help(_session: &mut Session, _args: &str) -> Response {
    let mut text = String::from("Available commands:");
    for entry in grammar::GRAMMAR {
        let synonyms = if entry.synonyms.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.synonyms.join(", "))
        };
        text.push_str(&format!("\n  {}{}: {}", entry.canonical, synonyms, entry.help));
    }
    Response::text(text)
}

// Default verb actions and continuation resumption. These take resolved
// references, so they serve both direct dispatch and disambiguation replies.

impl Session {
    /// Hands a raw line to the pending continuation. The slot was already
    /// emptied by the caller, so any continuation installed below lands in an
    /// empty slot.
    pub(crate) fn resume_continuation(
        &mut self,
        pending: Continuation,
        line: &str,
    ) -> Response {
        match pending {
            Continuation::AwaitingDisambiguation { candidates, resume } => {
                match line.parse::<usize>() {
                    Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                        debug!(choice, "disambiguation resolved");
                        let chosen = candidates[choice - 1].clone();
                        self.resume_action(resume, chosen)
                    }
                    _ => {
                        debug!(reply = %line, "disambiguation cancelled");
                        Response::error(format!("\"{line}\" is not a possible choice"))
                    }
                }
            }
            Continuation::AwaitingSecondObject { first } => {
                self.resume_second_object(first, line)
            }
        }
    }

    fn resume_action(&mut self, resume: ResumeAction, chosen: ResolvedRef) -> Response {
        match resume {
            ResumeAction::Examine => self.examine_object(&chosen),
            ResumeAction::Take => self.take_object(&chosen),
            ResumeAction::Drop => self.drop_object(&chosen),
            ResumeAction::UseAlone => self.use_alone(&chosen),
            ResumeAction::UseWithPhrase { phrase } => {
                if phrase.is_empty() {
                    self.await_second_object(chosen)
                } else {
                    self.resume_second_object(chosen, &phrase)
                }
            }
            ResumeAction::UseAsSecond { first } => self.finish_use_pair(&first, &chosen),
        }
    }

    /// Presents a numbered menu and installs the disambiguation continuation.
    pub(crate) fn begin_disambiguation(
        &mut self,
        candidates: Vec<ResolvedRef>,
        resume: ResumeAction,
    ) -> Response {
        let mut prompt = String::from("Which one? (Choose number)");
        for (index, candidate) in candidates.iter().enumerate() {
            prompt.push_str(&format!("\n{}. {}", index + 1, self.object_name(candidate)));
        }
        self.continuation = Some(Continuation::AwaitingDisambiguation { candidates, resume });
        Response::text(prompt)
    }

    /// Installs the second-object continuation and asks for the with-object.
    fn await_second_object(&mut self, first: ResolvedRef) -> Response {
        let name = self.object_name(&first);
        self.continuation = Some(Continuation::AwaitingSecondObject { first });
        Response::text(format!("Use the {name} with what?"))
    }

    /// Resolves the second object of a `use … with …` from its raw text and
    /// either executes the combined use or installs a further disambiguation.
    pub(crate) fn resume_second_object(&mut self, first: ResolvedRef, text: &str) -> Response {
        match resolver::resolve(text, Scopes::ALL, &self.world, &self.inventory) {
            Resolution::NotFound => not_found(text),
            Resolution::Found(second) => self.finish_use_pair(&first, &second),
            Resolution::Ambiguous(candidates) => {
                self.begin_disambiguation(candidates, ResumeAction::UseAsSecond { first })
            }
        }
    }

    fn examine_object(&mut self, target: &ResolvedRef) -> Response {
        if let Some(text) = self.run_command_hook("examine", &target.id) {
            return Response::text(text);
        }
        match resolver::object(&self.world, &self.inventory, target) {
            Some(object) => Response::text(object.desc().to_string()),
            None => not_found(target.id.as_str()),
        }
    }

    fn take_object(&mut self, target: &ResolvedRef) -> Response {
        if let Some(text) = self.run_command_hook("take", &target.id) {
            return Response::text(text);
        }
        let Some(room) = self.world.current_room_mut() else {
            return not_found(target.id.as_str());
        };
        let (name, pickupable) = match room.object(&target.id) {
            Some(object) => (object.name().to_string(), object.pickupable()),
            None => return not_found(target.id.as_str()),
        };
        if !pickupable {
            return Response::text(format!("Cannot pick up the {name}!"));
        }
        match room.remove_object(&target.id) {
            Some(object) => {
                self.inventory.add(object);
                Response::text(format!("Picked up the {name}!"))
            }
            None => not_found(target.id.as_str()),
        }
    }

    fn drop_object(&mut self, target: &ResolvedRef) -> Response {
        if let Some(text) = self.run_command_hook("drop", &target.id) {
            return Response::text(text);
        }
        let Some(object) = self.inventory.remove(&target.id) else {
            return not_found(target.id.as_str());
        };
        let name = object.name().to_string();
        match self.world.current_room_mut() {
            Some(room) => {
                room.insert_object(object);
                Response::text(format!("Dropped the {name}!"))
            }
            None => {
                // No room to drop into; keep the one-place invariant.
                self.inventory.add(object);
                Response::text("Room does not exist!")
            }
        }
    }

    fn use_alone(&mut self, target: &ResolvedRef) -> Response {
        let name = self.object_name(target);
        let Self {
            world,
            inventory,
            hooks,
            ..
        } = self;
        match hooks.use_hook(&target.id, None) {
            UseLookup::Handler(handler) => match handler(world, inventory) {
                Some(text) => Response::text(text),
                None => Response::text(format!("Cannot use {name} on its own")),
            },
            _ => Response::text(format!("Cannot use {name} on its own")),
        }
    }

    fn finish_use_pair(&mut self, first: &ResolvedRef, second: &ResolvedRef) -> Response {
        if first.id == second.id {
            return Response::error("Cannot use an object with itself!");
        }
        let use_name = self.object_name(first);
        let with_name = self.object_name(second);
        let Self {
            world,
            inventory,
            hooks,
            ..
        } = self;
        match hooks.use_hook(&first.id, Some(&second.id)) {
            UseLookup::Handler(handler) => match handler(world, inventory) {
                Some(text) => Response::text(text),
                None => Response::text(format!("Cannot use {use_name} with {with_name}")),
            },
            UseLookup::Reversed => Response::text(format!(
                "Cannot use {use_name} with {with_name} (Hint: try reversing them)"
            )),
            UseLookup::Missing => {
                Response::text(format!("Cannot use {use_name} with {with_name}"))
            }
        }
    }

    fn run_command_hook(&mut self, command: &str, id: &ObjectId) -> Option<String> {
        let Self {
            world,
            inventory,
            hooks,
            ..
        } = self;
        let handler = hooks.command_hook(command, id)?;
        handler(world, inventory)
    }

    fn object_name(&self, target: &ResolvedRef) -> String {
        resolver::object(&self.world, &self.inventory, target)
            .map_or_else(|| target.id.to_string(), |obj| obj.name().to_string())
    }
}
