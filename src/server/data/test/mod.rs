mod identity_form;
mod invitation;
mod seat;
mod student;
