pub trait SessionRepository {
    fn is_authenticated(&self) -> bool;

    fn set_authenticated(&mut self, authenticated: bool);
}
